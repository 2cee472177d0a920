use log::error;

use crate::botlib::{audit, text};
use crate::{bot, Context, Data, Error};

/// Marker error returned by [`command_check`] so the classifier can tell an
/// authorization rejection apart from any other check failure.
#[derive(Debug)]
pub struct PermissionDenied;

impl std::fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("missing administrator permission")
    }
}

impl std::error::Error for PermissionDenied {}

/// A command invocation failure, classified once at the framework boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    /// The prefix matched but no registered command did. Ignored by design.
    Unrecognized,
    ArgumentMissing {
        command: String,
    },
    ArgumentMalformed {
        command: String,
    },
    PermissionDenied {
        command: Option<String>,
        user: String,
    },
    /// The handler body returned an error; carries its rendered message.
    InvocationFailed {
        command: String,
        message: String,
    },
    Unclassified {
        message: String,
    },
}

/// What gets sent back for a classified failure: zero, one or two replies to
/// the invoking channel and at most one audit-log entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FailureResponse {
    pub replies: Vec<String>,
    pub audit: Option<String>,
}

/// Classify a framework error into a [`CommandFailure`].
///
/// Returns `None` for failures with no user-facing response of their own
/// (setup errors, event handler errors); those fall through to the poise
/// builtin handler.
fn classify(error: &poise::FrameworkError<'_, Data, Error>) -> Option<CommandFailure> {
    match error {
        poise::FrameworkError::UnknownCommand { .. } => Some(CommandFailure::Unrecognized),
        poise::FrameworkError::ArgumentParse { input, ctx, .. } => {
            let command = ctx.command().name.clone();
            match input {
                // No input means the argument was never supplied
                None => Some(CommandFailure::ArgumentMissing { command }),
                Some(_) => Some(CommandFailure::ArgumentMalformed { command }),
            }
        }
        poise::FrameworkError::CommandCheckFailed {
            error: Some(e),
            ctx,
            ..
        } if e.downcast_ref::<PermissionDenied>().is_some() => {
            Some(CommandFailure::PermissionDenied {
                command: Some(ctx.command().name.clone()),
                user: ctx.author().tag(),
            })
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            Some(CommandFailure::InvocationFailed {
                command: ctx.command().name.clone(),
                message: error.to_string(),
            })
        }
        _ => error.ctx().map(|_| CommandFailure::Unclassified {
            message: error.to_string(),
        }),
    }
}

/// Select the replies and audit entry for a classified failure.
///
/// Pure selection over the message table; the sends happen in [`on_error`].
pub fn respond_to(failure: &CommandFailure) -> FailureResponse {
    match failure {
        CommandFailure::Unrecognized => FailureResponse::default(),
        CommandFailure::ArgumentMissing { command } => FailureResponse {
            replies: text::missing_arg(command)
                .map(String::from)
                .into_iter()
                .collect(),
            audit: None,
        },
        CommandFailure::ArgumentMalformed { command } => {
            let mut replies: Vec<String> = text::bad_arg(command)
                .map(String::from)
                .into_iter()
                .collect();

            // timeout and role restate their usage line on a bad argument
            if matches!(command.as_str(), "timeout" | "role") {
                replies.extend(bot::usage(command).map(String::from));
            }

            FailureResponse {
                replies,
                audit: None,
            }
        }
        CommandFailure::PermissionDenied { user, .. } => FailureResponse {
            replies: vec![text::MISSING_PERMISSIONS.to_string()],
            audit: Some(format!(
                "{} attempted to use a command without the required permissions.",
                user
            )),
        },
        CommandFailure::InvocationFailed { message, .. }
        | CommandFailure::Unclassified { message } => FailureResponse {
            replies: vec![format!("{}: {}", text::GENERIC_ERROR_PREFIX, message)],
            audit: None,
        },
    }
}

/// Standard error handler, installed in the framework options.
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    let Some(failure) = classify(&error) else {
        if let Err(e) = poise::builtins::on_error(error).await {
            error!("Error while handling error: {}", e);
        }
        return;
    };

    if failure != CommandFailure::Unrecognized {
        error!("Command failure: {:?}", failure);
    }

    let response = respond_to(&failure);
    if response.replies.is_empty() && response.audit.is_none() {
        return;
    }

    let Some(ctx) = error.ctx() else {
        return;
    };

    for reply in &response.replies {
        if let Err(e) = ctx.say(reply.clone()).await {
            error!("Message send error for {:?}: {}", failure, e);
        }
    }

    if let Some(entry) = &response.audit {
        audit::send_log(ctx.http(), ctx.data().config.log_channel, entry).await;
    }
}

/// Authorization predicate run by poise before every handler body.
///
/// Commands flagged admin-only in the metadata require the administrator
/// permission in the invoking guild; everything else passes through.
pub async fn command_check(ctx: Context<'_>) -> Result<bool, Error> {
    let admin_only = bot::command_metadata()
        .get(ctx.command().name.as_str())
        .is_some_and(|meta| meta.admin_only);

    if !admin_only {
        return Ok(true);
    }

    let Some(member) = ctx.author_member().await else {
        return Err("This command can only be run from servers".into());
    };

    let permissions = {
        let Some(guild) = ctx.guild() else {
            return Err("This command can only be run from servers".into());
        };
        guild.member_permissions(&member)
    };

    if permissions.administrator() {
        Ok(true)
    } else {
        Err(Box::new(PermissionDenied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(command: &str) -> CommandFailure {
        CommandFailure::ArgumentMissing {
            command: command.to_string(),
        }
    }

    fn malformed(command: &str) -> CommandFailure {
        CommandFailure::ArgumentMalformed {
            command: command.to_string(),
        }
    }

    #[test]
    fn unrecognized_command_is_silent() {
        let response = respond_to(&CommandFailure::Unrecognized);
        assert!(response.replies.is_empty());
        assert!(response.audit.is_none());
    }

    #[test]
    fn missing_argument_uses_the_per_command_message() {
        for command in ["cl", "ban", "kick", "timeout", "role"] {
            let response = respond_to(&missing(command));
            assert_eq!(
                response.replies,
                vec![text::missing_arg(command).unwrap().to_string()]
            );
            assert!(response.audit.is_none());
        }
    }

    #[test]
    fn missing_argument_without_an_entry_is_silent() {
        for command in ["serverinfo", "help", "ex"] {
            let response = respond_to(&missing(command));
            assert!(response.replies.is_empty(), "reply for {}", command);
        }
    }

    #[test]
    fn malformed_cl_argument_gets_one_reply() {
        let response = respond_to(&malformed("cl"));
        assert_eq!(response.replies, vec![text::bad_arg("cl").unwrap()]);
    }

    #[test]
    fn malformed_timeout_and_role_arguments_also_get_the_usage_line() {
        for command in ["timeout", "role"] {
            let response = respond_to(&malformed(command));
            assert_eq!(
                response.replies,
                vec![
                    text::bad_arg(command).unwrap().to_string(),
                    bot::usage(command).unwrap().to_string(),
                ]
            );
        }
    }

    #[test]
    fn malformed_argument_without_an_entry_is_silent() {
        assert!(respond_to(&malformed("ban")).replies.is_empty());
        assert!(respond_to(&malformed("kick")).replies.is_empty());
    }

    #[test]
    fn permission_denied_replies_once_and_audits_once() {
        let response = respond_to(&CommandFailure::PermissionDenied {
            command: Some("ban".to_string()),
            user: "intruder#1234".to_string(),
        });

        assert_eq!(response.replies, vec![text::MISSING_PERMISSIONS]);
        let audit = response.audit.unwrap();
        assert!(audit.contains("intruder#1234"));
        assert!(audit.contains("without the required permissions"));
    }

    #[test]
    fn invocation_failures_echo_the_wrapped_message() {
        let response = respond_to(&CommandFailure::InvocationFailed {
            command: "ban".to_string(),
            message: "Missing Access".to_string(),
        });

        assert_eq!(
            response.replies,
            vec![format!("{}: Missing Access", text::GENERIC_ERROR_PREFIX)]
        );
        assert!(response.audit.is_none());
    }

    #[test]
    fn unclassified_failures_echo_the_raw_message() {
        let response = respond_to(&CommandFailure::Unclassified {
            message: "boom".to_string(),
        });

        assert_eq!(
            response.replies,
            vec![format!("{}: boom", text::GENERIC_ERROR_PREFIX)]
        );
    }
}
