use std::io::{self, BufRead, Write};

use log::{debug, error};

use super::prompt::Prompter;
use crate::{
    render,
    store::StoreManager,
    types::{DateRange, Transaction},
};

/// The interactive main loop over a `StoreManager`
pub struct Menu<'a, R, W> {
    manager: &'a StoreManager,
    prompt: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(manager: &'a StoreManager, prompt: Prompter<R, W>) -> Self {
        Self { manager, prompt }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Runs until the user picks Exit or the input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say("\nPersonal Finance Manager\n")?;
            self.prompt.say("1. Add Transaction")?;
            self.prompt.say("2. View Transactions & Reports")?;
            self.prompt.say("3. Exit")?;

            let Some(choice) = self.prompt.ask("\nEnter your choice: ")? else {
                return Ok(());
            };
            let keep_going = match choice.trim() {
                "1" => self.add_transaction()?,
                "2" => self.view_transactions()?,
                "3" => {
                    self.prompt.say("\nGoodbye!")?;
                    return Ok(());
                }
                _ => {
                    self.prompt.say("Invalid choice, please try again")?;
                    self.prompt.pause()?
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Returns false when the input ran out mid-flow
    fn add_transaction(&mut self) -> io::Result<bool> {
        self.prompt.say("\nAdd New Transaction\n")?;
        let Some(date) = self
            .prompt
            .date("Enter date (dd-mm-yyyy) or leave blank for today: ", true)?
        else {
            return Ok(false);
        };
        let Some(amount) = self.prompt.amount()? else {
            return Ok(false);
        };
        let Some(category) = self.prompt.category()? else {
            return Ok(false);
        };
        let Some(description) = self.prompt.description()? else {
            return Ok(false);
        };

        let tx = Transaction::new(date, amount, category, description);
        match self.manager.add_entry(&tx) {
            Ok(()) => self.prompt.say("Entry added successfully")?,
            Err(err) => {
                error!("{err}");
                self.prompt.say(&format!("Failed to add entry: {err}"))?;
            }
        }
        self.prompt.pause()
    }

    fn view_transactions(&mut self) -> io::Result<bool> {
        self.prompt.say("\nView Transactions\n")?;
        self.prompt.say("1. View all transactions")?;
        self.prompt.say("2. View by date range")?;
        self.prompt.say("3. Monthly summary")?;
        self.prompt.say("4. Plot income and expenses")?;

        let Some(choice) = self.prompt.ask("\nChoose an option: ")? else {
            return Ok(false);
        };
        let format = self.prompt.date_format();
        let text = match choice.trim() {
            "1" => self.listing(None),
            "2" => {
                self.prompt.say("Enter date range")?;
                let Some(start) = self.prompt.date("Start date (dd-mm-yyyy): ", false)? else {
                    return Ok(false);
                };
                let Some(end) = self.prompt.date("End date (dd-mm-yyyy): ", false)? else {
                    return Ok(false);
                };
                self.listing(Some(DateRange::new(start, end)))
            }
            "3" => match self.manager.get_monthly_summary() {
                Ok(summary) => render::monthly_summary(&summary),
                Err(err) => format!("{err}"),
            },
            "4" => match self.manager.get_transactions(None) {
                Ok(listing) => {
                    let series = StoreManager::plot_transactions(&listing.transactions);
                    debug!("Plotting {} days", series.len());
                    render::plot(&series, format)
                }
                Err(err) => format!("{err}"),
            },
            _ => "Invalid option".to_string(),
        };
        self.prompt.say(&text)?;
        self.prompt.pause()
    }

    fn listing(&self, range: Option<DateRange>) -> String {
        match self.manager.get_transactions(range) {
            Ok(listing) => render::listing(&listing, self.prompt.date_format()),
            Err(err) => {
                error!("{err}");
                format!("{err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn run(manager: &StoreManager, input: &str) -> String {
        let prompt = Prompter::new(input.as_bytes(), Vec::new(), "%d-%m-%Y")
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mut menu = Menu::new(manager, prompt);
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    fn manager() -> (TempDir, StoreManager) {
        let dir = TempDir::new().unwrap();
        let manager = StoreManager::new(StoreConfig::in_dir(dir.path()));
        manager.initialize().unwrap();
        (dir, manager)
    }

    #[test]
    fn test_exit() {
        let (_dir, manager) = manager();
        assert!(run(&manager, "3\n").contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_dir, manager) = manager();
        let out = run(&manager, "");
        assert!(out.contains("Enter your choice"));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice() {
        let (_dir, manager) = manager();
        assert!(run(&manager, "9\n\n3\n").contains("Invalid choice, please try again"));
    }

    #[test]
    fn test_add_then_list() {
        let (_dir, manager) = manager();
        let out = run(
            &manager,
            "1\n15-03-2024\n100\nI\nSalary\n\n1\n\n40\ne\nFood\n\n2\n1\n\n3\n",
        );
        assert_eq!(out.matches("Entry added successfully").count(), 2);
        assert!(out.contains("All Transactions"));
        assert!(out.contains("01-06-2024"));
        assert!(out.contains("Net Savings: $60.00"));

        let stored = fs::read_to_string(manager.config().store_file()).unwrap();
        assert!(stored.ends_with("15-03-2024,100,Income,Salary\n01-06-2024,40,Expense,Food\n"));
    }

    #[test]
    fn test_view_range_and_summary() {
        let (_dir, manager) = manager();
        run(&manager, "1\n15-03-2024\n100\nI\n\n\n1\n20-04-2024\n40\nE\n\n\n3\n");

        let out = run(&manager, "2\n2\n01-04-2024\n30-04-2024\n\n3\n");
        assert!(out.contains("Transactions from 01-04-2024 to 30-04-2024"));
        assert!(out.contains("Net Savings: -$40.00"));

        let out = run(&manager, "2\n3\n\n3\n");
        assert!(out.contains("Monthly Summary"));
        assert!(out.contains("2024-03"));
        assert!(out.contains("2024-04"));
    }

    #[test]
    fn test_view_plot() {
        let (_dir, manager) = manager();
        run(&manager, "1\n01-03-2024\n10\nI\n\n\n1\n03-03-2024\n5\nE\n\n\n3\n");
        let out = run(&manager, "2\n4\n\n3\n");
        assert!(out.contains("Income and Expenses"));
        assert!(out.contains("02-03-2024"));
    }

    #[test]
    fn test_view_on_corrupt_store_reports_error() {
        let (_dir, manager) = manager();
        fs::write(manager.config().store_file(), "garbage\n").unwrap();
        let out = run(&manager, "2\n1\n\n3\n");
        assert!(out.contains("Error reading transactions"));
    }
}
