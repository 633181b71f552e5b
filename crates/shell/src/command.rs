//! Terminal command parsing.

use core::str::FromStr;

use storefront_catalog::Price;
use storefront_core::{DomainError, ProductId};
use storefront_view::{CategoryFilter, SortOrder};

use crate::session::UiEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(UiEvent),
    ShowView,
    ShowCart,
    ShowCategories,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>        filter by title (case-insensitive); no text clears
  min <price>          lower price bound (inclusive)
  max <price|none>     upper price bound (inclusive); none removes it
  category <name|all>  show one category, or all
  sort <order>         price-low-to-high | price-high-to-low | unsorted
  add <id>             add one unit of a product to the cart
  remove <id>          remove one unit of a product from the cart
  view                 show the filtered product list
  cart                 show the cart
  categories           list catalog categories
  help                 show this text
  quit                 exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "search" => Command::Apply(UiEvent::SetNameQuery(rest.to_string())),
            "min" => {
                let price = require(rest, "min", "a price")?.parse::<Price>()?;
                Command::Apply(UiEvent::SetMinPrice(price))
            }
            "max" => {
                let raw = require(rest, "max", "a price or 'none'")?;
                let price = if raw.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(raw.parse::<Price>()?)
                };
                Command::Apply(UiEvent::SetMaxPrice(price))
            }
            "category" => Command::Apply(UiEvent::SetCategory(CategoryFilter::from(
                require(rest, "category", "a category name or 'all'")?,
            ))),
            "sort" => {
                let order = require(rest, "sort", "an order")?.parse::<SortOrder>()?;
                Command::Apply(UiEvent::SetSort(order))
            }
            "add" => {
                let id = require(rest, "add", "a product id")?.parse::<ProductId>()?;
                Command::Apply(UiEvent::AddToCart(id))
            }
            "remove" => {
                let id = require(rest, "remove", "a product id")?.parse::<ProductId>()?;
                Command::Apply(UiEvent::RemoveFromCart(id))
            }
            "view" | "ls" => Command::ShowView,
            "cart" => Command::ShowCart,
            "categories" => Command::ShowCategories,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn require<'a>(
    arg: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(arg)
    }
}
