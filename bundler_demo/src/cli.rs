use crate::apps::Action;
use clap::ArgGroup;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Alfred Dependency Bundler demo workflow", long_about = None)]
#[command(group(
    ArgGroup::new("action").args(["icons", "notify", "colour", "dates"])
))]
pub struct Args {
    /// List Font Awesome icons, filtered by QUERY
    #[arg(long)]
    pub icons: bool,

    /// Show a notification for the `name|font|colour` in QUERY
    #[arg(long)]
    pub notify: bool,

    /// Ask for a new icon colour
    #[arg(long)]
    pub colour: bool,

    /// Show the time in a few random timezones
    #[arg(long)]
    pub dates: bool,

    pub query: Option<String>,
}

impl Args {
    pub fn action(&self) -> Option<Action> {
        match (self.icons, self.notify, self.colour, self.dates) {
            (true, _, _, _) => Some(Action::Icons),
            (_, true, _, _) => Some(Action::Notify),
            (_, _, true, _) => Some(Action::Colour),
            (_, _, _, true) => Some(Action::Dates),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_flag_selects_its_action() {
        let cases = [
            ("--icons", Action::Icons),
            ("--notify", Action::Notify),
            ("--colour", Action::Colour),
            ("--dates", Action::Dates),
        ];
        for (flag, action) in cases {
            let args = Args::try_parse_from(["bundler_demo", flag]).unwrap();
            assert_eq!(args.action(), Some(action));
        }
    }

    #[test]
    fn query_is_optional() {
        let args = Args::try_parse_from(["bundler_demo", "--icons", "arrow"]).unwrap();
        assert_eq!(args.query.as_deref(), Some("arrow"));

        let args = Args::try_parse_from(["bundler_demo"]).unwrap();
        assert_eq!(args.action(), None);
        assert_eq!(args.query, None);
    }

    #[test]
    fn flags_are_mutually_exclusive() {
        assert!(Args::try_parse_from(["bundler_demo", "--icons", "--dates"]).is_err());
    }
}
