use std::str::FromStr;
use thiserror::Error;
use super::actions::PurchaseAction;
use super::tab::Tab;

/// One user interaction with the purchase screen.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectTab(Tab),
    Press { order_id: String, action: PurchaseAction },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(String),
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("unexpected extra input: {0}")]
    TrailingInput(String),
}

pub const USAGE: &str = "commands: tab <all|to-pay|to-ship|to-receive|completed|cancelled|return-refund>, \
pay <id>, pickup <id>, deliver <id>, review <id>, view-status <id>, details <id>, show, help, quit";

impl FromStr for UiEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(EventParseError::Empty)?;
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(EventParseError::TrailingInput(extra.to_string()));
        }

        let no_argument = |event: UiEvent| match argument {
            Some(extra) => Err(EventParseError::TrailingInput(extra.to_string())),
            None => Ok(event),
        };

        match command {
            "show" => no_argument(UiEvent::Show),
            "help" => no_argument(UiEvent::Help),
            "quit" | "exit" => no_argument(UiEvent::Quit),
            "tab" => {
                let name = argument.ok_or_else(|| EventParseError::MissingArgument(command.to_string()))?;
                name.parse()
                    .map(UiEvent::SelectTab)
                    .map_err(|_| EventParseError::UnknownTab(name.to_string()))
            }
            other => {
                let action: PurchaseAction = other
                    .parse()
                    .map_err(|_| EventParseError::UnknownCommand(other.to_string()))?;
                let order_id = argument.ok_or_else(|| EventParseError::MissingArgument(other.to_string()))?;
                Ok(UiEvent::Press { order_id: order_id.to_string(), action })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;

    #[test]
    fn test_parse_commands() {
        assert_eq!("tab to-ship".parse::<UiEvent>(), Ok(UiEvent::SelectTab(Tab::Status(OrderStatus::ToShip))));
        assert_eq!("  tab   all ".parse::<UiEvent>(), Ok(UiEvent::SelectTab(Tab::All)));
        assert_eq!(
            "pay A1".parse::<UiEvent>(),
            Ok(UiEvent::Press { order_id: "A1".to_string(), action: PurchaseAction::PayNow })
        );
        assert_eq!(
            "view-status R9".parse::<UiEvent>(),
            Ok(UiEvent::Press { order_id: "R9".to_string(), action: PurchaseAction::ViewStatus })
        );
        assert_eq!("show".parse::<UiEvent>(), Ok(UiEvent::Show));
        assert_eq!("exit".parse::<UiEvent>(), Ok(UiEvent::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<UiEvent>(), Err(EventParseError::Empty));
        assert_eq!("ship A1".parse::<UiEvent>(), Err(EventParseError::UnknownCommand("ship".to_string())));
        assert_eq!("pay".parse::<UiEvent>(), Err(EventParseError::MissingArgument("pay".to_string())));
        assert_eq!("tab later".parse::<UiEvent>(), Err(EventParseError::UnknownTab("later".to_string())));
        assert_eq!("show all".parse::<UiEvent>(), Err(EventParseError::TrailingInput("all".to_string())));
        assert_eq!("pay A1 A2".parse::<UiEvent>(), Err(EventParseError::TrailingInput("A2".to_string())));
    }
}
