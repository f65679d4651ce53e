pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<utils::logging::LogFormat>(), Ok(utils::logging::LogFormat::Json));
        assert_eq!("compact".parse::<utils::logging::LogFormat>(), Ok(utils::logging::LogFormat::Compact));
        assert!("xml".parse::<utils::logging::LogFormat>().is_err());
    }
}
