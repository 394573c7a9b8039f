use crate::workflow::Feedback;
use crate::workflow::Item;
use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use chrono_tz::Tz;
use rand::seq::SliceRandom;
use rand::Rng;

pub const ZONE_COUNT: usize = 10;
const TIME_FORMAT: &str = "%H:%M";

// legacy aliases kept around by the tz database for backwards compatibility
const LEGACY_PREFIXES: &[&str] = &[
    "Etc/", "SystemV/", "US/", "Canada/", "Brazil/", "Chile/", "Mexico/",
];

// `Area/Location` names from tzdata's `backward` file, all links to a
// canonical zone
const BACKWARD_LINKS: &[&str] = &[
    "Africa/Asmera", "Africa/Timbuktu", "America/Argentina/ComodRivadavia",
    "America/Atka", "America/Buenos_Aires", "America/Catamarca",
    "America/Coral_Harbour", "America/Cordoba", "America/Ensenada",
    "America/Fort_Wayne", "America/Godthab", "America/Indianapolis", "America/Jujuy",
    "America/Knox_IN", "America/Louisville", "America/Mendoza", "America/Montreal",
    "America/Nipigon", "America/Pangnirtung", "America/Porto_Acre",
    "America/Rainy_River", "America/Rosario", "America/Santa_Isabel",
    "America/Shiprock", "America/Thunder_Bay", "America/Virgin",
    "America/Yellowknife", "Antarctica/South_Pole", "Asia/Ashkhabad",
    "Asia/Calcutta", "Asia/Chongqing", "Asia/Chungking", "Asia/Dacca", "Asia/Harbin",
    "Asia/Istanbul", "Asia/Kashgar", "Asia/Katmandu", "Asia/Macao", "Asia/Rangoon",
    "Asia/Saigon", "Asia/Tel_Aviv", "Asia/Thimbu", "Asia/Ujung_Pandang",
    "Asia/Ulan_Bator", "Atlantic/Faeroe", "Atlantic/Jan_Mayen", "Australia/ACT",
    "Australia/Canberra", "Australia/Currie", "Australia/LHI", "Australia/NSW",
    "Australia/North", "Australia/Queensland", "Australia/South",
    "Australia/Tasmania", "Australia/Victoria", "Australia/West",
    "Australia/Yancowinna", "Europe/Belfast", "Europe/Kiev", "Europe/Nicosia",
    "Europe/Tiraspol", "Europe/Uzhgorod", "Europe/Zaporozhye", "Pacific/Enderbury",
    "Pacific/Johnston", "Pacific/Ponape", "Pacific/Samoa", "Pacific/Truk",
    "Pacific/Yap",
];

/// Zones worth showing a person: canonical `Area/Location` names only.
pub fn common_zones() -> Vec<Tz> {
    chrono_tz::TZ_VARIANTS
        .iter()
        .copied()
        .filter(|tz| is_common_zone(tz.name()))
        .collect()
}

fn is_common_zone(name: &str) -> bool {
    name.contains('/')
        && !LEGACY_PREFIXES.iter().any(|p| name.starts_with(p))
        && !BACKWARD_LINKS.contains(&name)
}

/// `(HH:MM, label)` pairs for local time, UTC and each of `zones`, earliest
/// first.
pub fn time_entries(now: DateTime<Utc>, zones: &[Tz]) -> Vec<(String, String)> {
    let mut times = vec![
        (
            now.with_timezone(&Local).format(TIME_FORMAT).to_string(),
            "Local time".to_owned(),
        ),
        (now.format(TIME_FORMAT).to_string(), "UTC".to_owned()),
    ];

    times.extend(zones.iter().map(|tz| {
        (
            now.with_timezone(tz).format(TIME_FORMAT).to_string(),
            tz.name().replace('_', " "),
        )
    }));

    times.sort();
    times
}

pub fn run(now: DateTime<Utc>, rng: &mut impl Rng) -> Feedback {
    let zones = common_zones()
        .choose_multiple(rng, ZONE_COUNT)
        .copied()
        .collect::<Vec<_>>();
    tracing::debug!(zones = ?zones.iter().map(|tz| tz.name()).collect::<Vec<_>>(), "sampled zones");

    let mut feedback = Feedback::default();
    for (time, label) in time_entries(now, &zones) {
        feedback.push(Item::new(format!("{time} {label}")));
    }
    feedback
}
