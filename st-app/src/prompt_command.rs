use crate::{AppError, AppResult};

use st_controller::UiAction;
use st_core::Credentials;

use std::str::FromStr;

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Action(UiAction),
    Screen,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  register                    open the Register screen (from Login)
  back                        return to Login (from Register)
  login <email> <password>    sign in (from Login)
  signup <email> <password>   create an account (from Register)
  start                       record going to sleep (from Dashboard)
  stop                        record waking up (from Dashboard)
  logout                      sign out (from Dashboard)
  screen                      show the active screen
  help                        show this text
  quit                        exit";

impl FromStr for PromptCommand {
    type Err = AppError;

    fn from_str(line: &str) -> AppResult<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(AppError::command("empty command, type 'help'"));
        };
        let name = name.to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (name.as_str(), args.as_slice()) {
            ("register", []) => Self::Action(UiAction::SelectRegister),
            ("back", []) => Self::Action(UiAction::SelectBack),
            ("login", [email, password]) => {
                Self::Action(UiAction::SubmitLogin(Credentials::new(*email, *password)))
            }
            ("signup", [email, password]) => {
                Self::Action(UiAction::SubmitRegister(Credentials::new(*email, *password)))
            }
            ("start", []) => Self::Action(UiAction::StartSleep),
            ("stop", []) => Self::Action(UiAction::StopSleep),
            ("logout", []) => Self::Action(UiAction::Logout),
            ("screen", []) => Self::Screen,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            ("login" | "signup", _) => {
                return Err(AppError::command(format!(
                    "usage: {name} <email> <password>"
                )));
            }
            (
                "register" | "back" | "start" | "stop" | "logout" | "screen" | "help" | "quit"
                | "exit",
                _,
            ) => {
                return Err(AppError::command(format!("'{name}' takes no arguments")));
            }
            (other, _) => {
                return Err(AppError::command(format!(
                    "unknown command '{other}', type 'help'"
                )));
            }
        };

        Ok(command)
    }
}
