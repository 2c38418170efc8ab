use crate::{error_fmt::error_chain_fmt, price::Provider};
use std::{
    fmt::Debug,
    io::{BufRead, Write},
};

#[derive(thiserror::Error)]
pub enum SelectionError {
    #[error("Failed to read the provider choice")]
    Io(#[from] std::io::Error),
    #[error("Invalid choice {0:?}, expected a number")]
    NotANumber(String),
    #[error("Invalid choice {0}, expected a number from 1 to 5")]
    OutOfRange(i64),
}

impl Debug for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn write_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "Choose an API to grab the Bitcoin price from:")?;
    for provider in Provider::ALL {
        writeln!(output, "{}. {}", provider.menu_number(), provider)?;
    }
    output.flush()
}

pub fn read_selection<R: BufRead>(input: &mut R) -> Result<Provider, SelectionError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let choice = line.trim();
    let number = choice
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber(choice.to_owned()))?;
    Provider::from_menu_number(number).ok_or(SelectionError::OutOfRange(number))
}
