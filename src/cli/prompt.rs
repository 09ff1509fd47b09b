use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::{store::StoreAmount, types::Category};

/// Line-oriented input over any reader/writer pair.
///
/// Every reader returns `Ok(None)` once the input is exhausted; invalid
/// answers print a message and ask again.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
    date_format: &'static str,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, date_format: &'static str) -> Self {
        Self {
            input,
            output,
            today: Local::now().date_naive(),
            date_format,
        }
    }

    /// Fixes the date used for blank date answers
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn date_format(&self) -> &'static str {
        self.date_format
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Raw answer without its line ending
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn date(&mut self, question: &str, allow_default: bool) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if allow_default && answer.is_empty() {
                return Ok(Some(self.today));
            }
            match NaiveDate::parse_from_str(answer, self.date_format) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => self.say("Invalid date format. Please enter the date in dd-mm-yyyy format")?,
            }
        }
    }

    pub fn amount(&mut self) -> io::Result<Option<Decimal>> {
        loop {
            let Some(answer) = self.ask("Enter the amount: ")? else {
                return Ok(None);
            };
            match StoreAmount::from(answer).parse(0) {
                Ok(amount) if amount.is_sign_negative() && !amount.is_zero() => {
                    self.say("Amount must be a non-negative value")?
                }
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => self.say("Invalid amount. Please enter a number")?,
            }
        }
    }

    pub fn category(&mut self) -> io::Result<Option<Category>> {
        loop {
            let Some(answer) = self.ask("Enter the category ('I' for Income or 'E' for Expense): ")?
            else {
                return Ok(None);
            };
            match answer.trim().to_uppercase().as_str() {
                "I" => return Ok(Some(Category::Income)),
                "E" => return Ok(Some(Category::Expense)),
                _ => self.say("Invalid category. Please enter 'I' for Income or 'E' for Expense")?,
            }
        }
    }

    pub fn description(&mut self) -> io::Result<Option<String>> {
        Ok(self
            .ask("Enter a description (optional): ")?
            .map(|answer| answer.trim().to_string()))
    }

    /// Waits for Enter; false when the input is exhausted
    pub fn pause(&mut self) -> io::Result<bool> {
        Ok(self.ask("\nPress Enter to continue...")?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FORMAT: &str = "%d-%m-%Y";

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new(), FORMAT)
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[rstest]
    #[case("15-03-2024\n", true, Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()))]
    #[case("\n", true, Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))]
    #[case("\n15-03-2024\n", false, Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()))]
    #[case("2024-03-15\n01-02-2024\n", false, Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()))]
    #[case("nope\n", true, None)]
    #[case("", true, None)]
    fn test_date(#[case] input: &str, #[case] allow_default: bool, #[case] expected: Option<NaiveDate>) {
        let mut prompt = prompter(input);
        assert_eq!(prompt.date("Date: ", allow_default).unwrap(), expected);
    }

    #[test]
    fn test_date_reprompts_with_message() {
        let mut prompt = prompter("bad\n15-03-2024\n");
        prompt.date("Date: ", false).unwrap();
        let out = String::from_utf8(prompt.into_output()).unwrap();
        assert!(out.contains("Invalid date format"));
        assert_eq!(out.matches("Date: ").count(), 2);
    }

    #[rstest]
    #[case("12.50\n", Some(Decimal::new(1250, 2)))]
    #[case("0\n", Some(Decimal::ZERO))]
    #[case("-5\n7\n", Some(Decimal::new(7, 0)))]
    #[case("ten\n\n3\n", Some(Decimal::new(3, 0)))]
    #[case("-1\n", None)]
    fn test_amount(#[case] input: &str, #[case] expected: Option<Decimal>) {
        let mut prompt = prompter(input);
        assert_eq!(prompt.amount().unwrap(), expected);
    }

    #[rstest]
    #[case("I\n", Some(Category::Income))]
    #[case("e\n", Some(Category::Expense))]
    #[case("x\nIncome\nE\n", Some(Category::Expense))]
    #[case("", None)]
    fn test_category(#[case] input: &str, #[case] expected: Option<Category>) {
        let mut prompt = prompter(input);
        assert_eq!(prompt.category().unwrap(), expected);
    }

    #[test]
    fn test_description_may_be_empty() {
        let mut prompt = prompter("\n  Coffee beans \n");
        assert_eq!(prompt.description().unwrap(), Some(String::new()));
        assert_eq!(prompt.description().unwrap(), Some("Coffee beans".to_string()));
        assert_eq!(prompt.description().unwrap(), None);
    }

    #[test]
    fn test_pause() {
        let mut prompt = prompter("\n");
        assert!(prompt.pause().unwrap());
        assert!(!prompt.pause().unwrap());
    }
}
