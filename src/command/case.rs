use crate::case::{to_camel_capital_case, to_camel_case, to_snake_case};
use crate::cli::CaseStyle;

pub fn convert(word: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Snake => to_snake_case(word),
        CaseStyle::Camel => to_camel_case(word),
        CaseStyle::Pascal => to_camel_capital_case(word),
    }
}

pub fn run_case(word: &str, style: CaseStyle) {
    println!("{}", convert(word, style));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_styles() {
        assert_eq!(convert("maxRetryCount", CaseStyle::Snake), "max_retry_count");
        assert_eq!(convert("max_retry_count", CaseStyle::Camel), "maxRetryCount");
        assert_eq!(convert("max_retry_count", CaseStyle::Pascal), "MaxRetryCount");
    }
}
