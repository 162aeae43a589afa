//! Static yoga definition table.
//!
//! Each entry names the conditions that form the yoga and declares which
//! grahas carry its strength. Table order is the output order of
//! [`crate::detect_yogas`].

use jyotish_base::Graha;
use serde::Serialize;

/// How the grahas behind a yoga are chosen for strength estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanetSelector {
    /// A fixed set of grahas.
    Grahas(&'static [Graha]),
    /// Lords of the listed houses.
    HouseLords(&'static [u8]),
    /// Lords of the listed houses plus fixed grahas.
    HouseLordsWith(&'static [u8], &'static [Graha]),
    /// Grahas occupying the listed houses.
    Occupants(&'static [u8]),
    /// Every debilitated graha and the lord of the sign it occupies.
    DebilitatedWithDispositors,
    /// Every graha in a mutual sign exchange.
    ExchangePairs,
    /// Every placed classical graha.
    AllPlanets,
    /// Derived from the condition names.
    FromConditions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YogaDefinition {
    pub name: &'static str,
    pub conditions: &'static [&'static str],
    pub description: &'static str,
    #[serde(skip)]
    pub selector: PlanetSelector,
}

pub const YOGA_COUNT: usize = 88;

pub static YOGA_DEFINITIONS: [YogaDefinition; YOGA_COUNT] = [
    YogaDefinition {
        name: "Amsa Yoga",
        conditions: &["ascendant_lord_in_own_navamsa_with_benefics"],
        description: "Longevity, fame, and personal strength",
        selector: PlanetSelector::HouseLords(&[1]),
    },
    YogaDefinition {
        name: "Bheri Yoga",
        conditions: &["9th_lord_with_venus_in_kendra_from_ascendant"],
        description: "Wealth, prosperity, and supportive family",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Mrigendra Yoga",
        conditions: &["strong_7th_lord_in_kendra_with_jupiter"],
        description: "Powerful partnerships and social influence",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Parijata Yoga",
        conditions: &["9th_lord_in_exaltation_with_ascendant_lord"],
        description: "Happiness, success, and divine favor",
        selector: PlanetSelector::HouseLords(&[9, 1]),
    },
    YogaDefinition {
        name: "Kahala Yoga (Alternate)",
        conditions: &["4th_lord_in_kendra_with_strong_moon"],
        description: "Comforts, vehicles, and domestic bliss",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Chakra Yoga",
        conditions: &["ascendant_lord_in_1st_with_9th_lord_in_10th"],
        description: "Leadership and professional dominance",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Dhwaja Yoga",
        conditions: &["10th_lord_in_exaltation_with_benefic_in_9th"],
        description: "Renown and success in career",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Kusala Yoga",
        conditions: &["benefics_in_5th_with_9th_lord_in_kendra"],
        description: "Wisdom, children, and good fortune",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Sukha Yoga",
        conditions: &["4th_lord_in_kendra_with_venus_or_jupiter"],
        description: "Happiness, luxury, and comfortable life",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Jaladhi Yoga",
        conditions: &["moon_in_4th_with_venus_and_jupiter"],
        description: "Wealth, emotional stability, and comforts",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Raja Sambandha Yoga",
        conditions: &["10th_lord_with_9th_lord_in_kendra"],
        description: "Connections with influential figures",
        selector: PlanetSelector::HouseLords(&[9, 10]),
    },
    YogaDefinition {
        name: "Yogini Yoga",
        conditions: &["3rd_lord_in_6th_with_benefic_aspects"],
        description: "Success in competitions and courage",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Santana Yoga",
        conditions: &["5th_lord_in_kendra_with_jupiter_in_5th"],
        description: "Blessed with children and creativity",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Ayush Yoga",
        conditions: &["8th_lord_in_kendra_with_benefic_influence"],
        description: "Long life and good health",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Siddhi Yoga",
        conditions: &["jupiter_in_9th_with_venus_in_kendra"],
        description: "Spiritual success and divine blessings",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Matri Yoga",
        conditions: &["4th_lord_with_moon_in_kendra"],
        description: "Strong maternal bonds and domestic harmony",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Pitri Yoga",
        conditions: &["9th_lord_with_sun_in_kendra"],
        description: "Respect for traditions and paternal support",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Bandhu Yoga",
        conditions: &["3rd_lord_with_mercury_in_kendra"],
        description: "Strong sibling relationships and communication",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Jaya Yoga",
        conditions: &["10th_lord_in_exaltation_with_6th_lord"],
        description: "Victory over enemies and professional success",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Vallaki Yoga",
        conditions: &["planets_in_seven_houses"],
        description: "Versatility and widespread influence",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Yupa Yoga",
        conditions: &["planets_in_first_four_houses"],
        description: "Spiritual discipline and early life success",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Shula Yoga",
        conditions: &["planets_in_three_houses"],
        description: "Determination and focused achievements",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Nala Yoga",
        conditions: &["planets_in_two_houses"],
        description: "Resilience and success through partnerships",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Gada Yoga",
        conditions: &["planets_in_two_adjacent_houses"],
        description: "Wealth and strong social connections",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Shakti Yoga",
        conditions: &["planets_in_four_consecutive_houses"],
        description: "Power and influence in endeavors",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Danda Yoga",
        conditions: &["planets_in_three_consecutive_houses"],
        description: "Authority and disciplined leadership",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Nau Yoga",
        conditions: &["planets_in_five_consecutive_houses"],
        description: "Travel, wealth, and adaptability",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Kuta Yoga",
        conditions: &["planets_in_six_houses"],
        description: "Strategic thinking and resource management",
        selector: PlanetSelector::HouseLords(&[7, 9]),
    },
    YogaDefinition {
        name: "Sankhya Yoga",
        conditions: &["planets_distributed_in_multiple_houses"],
        description: "Balanced success across life areas",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Harsha Yoga",
        conditions: &["6th_lord_in_6th_with_benefic_aspects"],
        description: "Protection from enemies and good health",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Sarala Yoga",
        conditions: &["8th_lord_in_8th_with_benefic_influence"],
        description: "Longevity and overcoming obstacles",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Vijaya Yoga",
        conditions: &["mars_in_3rd_with_benefic_aspects"],
        description: "Courage, success, and sibling support",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Chamara Yoga",
        conditions: &["ascendant_lord_in_kendra_with_jupiter_aspect"],
        description: "Fame, eloquence, and leadership",
        selector: PlanetSelector::HouseLords(&[7, 9, 10]),
    },
    YogaDefinition {
        name: "Kalanidhi Yoga",
        conditions: &["jupiter_in_5th_or_9th_with_venus_mercury"],
        description: "Artistic talent and intellectual brilliance",
        selector: PlanetSelector::HouseLordsWith(&[5], &[Graha::Guru, Graha::Shukra]),
    },
    YogaDefinition {
        name: "Kusumita Yoga",
        conditions: &["venus_in_5th_with_moon_and_jupiter"],
        description: "Romantic success and creative talents",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Kalpadruma Yoga",
        conditions: &["ascendant_lord_in_exaltation_with_9th_lord"],
        description: "Immense fortune and spiritual growth",
        selector: PlanetSelector::HouseLordsWith(&[1], &[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Suryatapa Yoga",
        conditions: &["sun_in_10th_with_benefic_aspects"],
        description: "Fame, authority, and professional success",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Kusuma Yoga",
        conditions: &["venus_in_kendra_with_moon_in_5th_or_9th"],
        description: "Charm, luxury, and artistic achievements",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Srikanta Yoga",
        conditions: &["ascendant_lord_venus_jupiter_in_kendra"],
        description: "Wealth, beauty, and virtuous character",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Srinatha Yoga",
        conditions: &["7th_lord_with_venus_in_kendra"],
        description: "Happy marriage and social prominence",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Virinchi Yoga",
        conditions: &["jupiter_in_5th_with_strong_mercury"],
        description: "Wisdom, creativity, and spiritual knowledge",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Brahma Yoga",
        conditions: &["jupiter_venus_mercury_in_kendra_or_trikona"],
        description: "High intellect and spiritual leadership",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Simhasana Yoga",
        conditions: &["10th_lord_in_1st_with_jupiter"],
        description: "Royal status and leadership in career",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Parvata Yoga",
        conditions: &["benefics_in_kendra_no_malefics_in_trikona"],
        description: "Wealth, fame, and charitable nature",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Chatussagara Yoga",
        conditions: &["all_kendras_occupied_by_planets"],
        description: "Widespread fame and influence",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Gola Yoga",
        conditions: &["planets_in_single_house_except_sun_moon"],
        description: "Focused success in specific life areas",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Kedara Yoga",
        conditions: &["planets_in_four_houses"],
        description: "Stability, wealth, and agricultural prosperity",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Pasa Yoga",
        conditions: &["planets_in_five_houses"],
        description: "Social influence and resourcefulness",
        selector: PlanetSelector::AllPlanets,
    },
    YogaDefinition {
        name: "Dala Yoga",
        conditions: &["benefics_in_3rd_and_11th_from_ascendant"],
        description: "Financial gains and supportive siblings",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Mala Yoga",
        conditions: &["benefics_in_three_kendras"],
        description: "Purity, wealth, and moral strength",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Bhaskara Yoga",
        conditions: &["sun_in_2nd_from_moon_with_jupiter"],
        description: "Charisma, wealth, and leadership",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Marud Yoga",
        conditions: &["jupiter_in_trikona_with_venus_in_kendra"],
        description: "Eloquence, prosperity, and social charm",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Sakata Yoga",
        conditions: &["moon_in_6th_8th_12th_from_jupiter"],
        description: "Financial ups and downs unless mitigated",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Vimala Yoga",
        conditions: &["12th_lord_in_12th_with_benefic_aspects"],
        description: "Frugality, integrity, and spiritual growth",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Dhana Yoga",
        conditions: &["lords_of_2_11_in_kendra_or_trikona"],
        description: "Immense wealth and financial success",
        selector: PlanetSelector::HouseLordsWith(&[2, 5, 9, 11], &[Graha::Shukra, Graha::Guru]),
    },
    YogaDefinition {
        name: "Saraswati Yoga",
        conditions: &["jupiter_mercury_venus_in_kendra_or_2nd"],
        description: "Scholarly knowledge and artistic talents",
        selector: PlanetSelector::Grahas(&[Graha::Guru, Graha::Buddh, Graha::Shukra]),
    },
    YogaDefinition {
        name: "Vasuman Yoga",
        conditions: &["benefics_in_3rd_6th_10th_11th_from_moon"],
        description: "Abundant wealth and prosperity",
        selector: PlanetSelector::Occupants(&[3, 6, 10, 11]),
    },
    YogaDefinition {
        name: "Pushkala Yoga",
        conditions: &["lord_of_ascendant_with_moon_in_kendra"],
        description: "Fame, wealth, and influential status",
        selector: PlanetSelector::HouseLordsWith(&[1], &[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Shankha Yoga",
        conditions: &["lords_of_5th_6th_in_kendra_with_strong_ascendant"],
        description: "Longevity, wealth, and virtuous life",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Bhadra Yoga",
        conditions: &["mercury_in_kendra_in_own_or_exalted_sign"],
        description: "Intelligence, eloquence, and leadership",
        selector: PlanetSelector::Grahas(&[Graha::Buddh]),
    },
    YogaDefinition {
        name: "Malavya Yoga",
        conditions: &["venus_in_kendra_in_own_or_exalted_sign"],
        description: "Luxury, charm, and artistic success",
        selector: PlanetSelector::Grahas(&[Graha::Shukra]),
    },
    YogaDefinition {
        name: "Ruchaka Yoga",
        conditions: &["mars_in_kendra_in_own_or_exalted_sign"],
        description: "Courage, valor, and leadership in battle",
        selector: PlanetSelector::Grahas(&[Graha::Mangal]),
    },
    YogaDefinition {
        name: "Hamsa Yoga",
        conditions: &["jupiter_in_kendra_in_own_or_exalted_sign"],
        description: "Wisdom, spirituality, and respect",
        selector: PlanetSelector::Grahas(&[Graha::Guru]),
    },
    YogaDefinition {
        name: "Sasha Yoga",
        conditions: &["saturn_in_kendra_in_own_or_exalted_sign"],
        description: "Authority, discipline, and leadership",
        selector: PlanetSelector::Grahas(&[Graha::Shani]),
    },
    YogaDefinition {
        name: "Adhi Yoga",
        conditions: &["benefics_in_6th_7th_8th_from_moon"],
        description: "Leadership, wealth, and high status",
        selector: PlanetSelector::Grahas(&[Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra]),
    },
    YogaDefinition {
        name: "Lakshmi Yoga",
        conditions: &["lord_of_9th_in_kendra_with_venus"],
        description: "Wealth, prosperity, and divine favor",
        selector: PlanetSelector::Grahas(&[Graha::Shukra, Graha::Chandra]),
    },
    YogaDefinition {
        name: "Guru Mangala Yoga",
        conditions: &["jupiter_mars_conjunction"],
        description: "Optimism, courage, and success in endeavors",
        selector: PlanetSelector::FromConditions,
    },
    YogaDefinition {
        name: "Maha Bhagya Yoga",
        conditions: &["day_birth_sun_moon_ascendant_in_odd_signs"],
        description: "Great fortune and success",
        selector: PlanetSelector::Grahas(&[Graha::Surya, Graha::Chandra]),
    },
    YogaDefinition {
        name: "Shubha Kartari Yoga",
        conditions: &["benefics_flanking_ascendant"],
        description: "Protection, success, and prosperity",
        selector: PlanetSelector::Grahas(&[Graha::Chandra, Graha::Guru, Graha::Shukra]),
    },
    YogaDefinition {
        name: "Pap Kartari Yoga",
        conditions: &["malefics_flanking_ascendant"],
        description: "Obstacles and challenges in life",
        selector: PlanetSelector::Grahas(&[Graha::Chandra, Graha::Surya, Graha::Mangal, Graha::Shani]),
    },
    YogaDefinition {
        name: "Chandra Adhi Yoga",
        conditions: &["benefics_in_6th_7th_8th_from_moon_without_malefics"],
        description: "Mental strength, wealth, and leadership",
        selector: PlanetSelector::Grahas(&[Graha::Chandra, Graha::Guru, Graha::Shukra]),
    },
    YogaDefinition {
        name: "Raj Yoga",
        conditions: &[
            "kendra_lord_in_trikona",
            "trikona_lord_in_kendra",
            "kendra_lord_aspects_trikona_lord",
            "trikona_lord_aspects_kendra_lord",
        ],
        description: "Wealth, power and high status in life",
        selector: PlanetSelector::HouseLords(&[1, 4, 7, 10, 5, 9]),
    },
    YogaDefinition {
        name: "Gajakesari Yoga",
        conditions: &["jupiter_moon_conjunction"],
        description: "Wisdom, wealth and royal favor",
        selector: PlanetSelector::Grahas(&[Graha::Guru, Graha::Chandra]),
    },
    YogaDefinition {
        name: "Sunapha Yoga",
        conditions: &["planets_in_2nd_from_moon"],
        description: "Wealth and comforts",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Anapha Yoga",
        conditions: &["planets_in_12th_from_moon"],
        description: "Spiritual growth and comforts",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Durudhara Yoga",
        conditions: &["planets_in_2nd_and_12th_from_moon"],
        description: "Wealth and prosperity",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Vipareeta Raj Yoga",
        conditions: &["malefic_lords_of_6_8_12_in_kendra"],
        description: "Success through adversity",
        selector: PlanetSelector::HouseLords(&[6, 8, 12]),
    },
    YogaDefinition {
        name: "Neecha Bhanga Raj Yoga",
        conditions: &["debilitated_planet_in_kendra_with_strong_owner"],
        description: "Cancellation of debilitation bringing success",
        selector: PlanetSelector::DebilitatedWithDispositors,
    },
    YogaDefinition {
        name: "Parivartana Yoga",
        conditions: &["mutual_exchange_between_planets"],
        description: "Exchange of houses between planets",
        selector: PlanetSelector::ExchangePairs,
    },
    YogaDefinition {
        name: "Kemadruma Yoga",
        conditions: &["moon_without_planetary_support"],
        description: "Challenges unless cancelled",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Pancha Mahapurusha Yoga",
        conditions: &["strong_planets_in_angular_houses"],
        description: "Exceptional abilities and success",
        selector: PlanetSelector::Grahas(&[Graha::Mangal, Graha::Buddh, Graha::Guru, Graha::Shukra, Graha::Shani]),
    },
    YogaDefinition {
        name: "Chandra-Mangala Yoga",
        conditions: &["moon_mars_conjunction"],
        description: "Courage and leadership",
        selector: PlanetSelector::Grahas(&[Graha::Chandra, Graha::Mangal]),
    },
    YogaDefinition {
        name: "Budha-Aditya Yoga",
        conditions: &["mercury_sun_conjunction"],
        description: "Intelligence and communication skills",
        selector: PlanetSelector::Grahas(&[Graha::Buddh, Graha::Surya]),
    },
    YogaDefinition {
        name: "Amala Yoga",
        conditions: &["benefic_in_10th"],
        description: "Good reputation and moral character",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Kahala Yoga",
        conditions: &["moon_in_4th_with_benefics"],
        description: "Wealth and vehicles",
        selector: PlanetSelector::Grahas(&[Graha::Chandra]),
    },
    YogaDefinition {
        name: "Vesi Yoga",
        conditions: &["planets_in_2nd_from_sun"],
        description: "Wealth and prosperity",
        selector: PlanetSelector::Grahas(&[Graha::Surya]),
    },
    YogaDefinition {
        name: "Vashi Yoga",
        conditions: &["planets_in_12th_from_sun"],
        description: "Power to influence others",
        selector: PlanetSelector::Grahas(&[Graha::Surya]),
    },
    YogaDefinition {
        name: "Ubhayachari Yoga",
        conditions: &["planets_in_2nd_and_12th_from_sun"],
        description: "Wealth and royal favor",
        selector: PlanetSelector::Grahas(&[Graha::Surya]),
    },
];

/// Look up a definition by its exact name.
pub fn yoga_definition(name: &str) -> Option<&'static YogaDefinition> {
    YOGA_DEFINITIONS.iter().find(|y| y.name == name)
}
