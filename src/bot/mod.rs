use indexmap::IndexMap;

mod info;
mod moderation;
mod promo;

/// Static description of a registered command: the usage line shown by
/// `help` (None for undocumented commands) and whether the authorization
/// check requires the administrator permission.
pub struct CommandMeta {
    pub usage: Option<&'static str>,
    pub admin_only: bool,
}

pub fn raw_commands() -> Vec<crate::Command> {
    vec![
        moderation::cl(),
        moderation::ban(),
        moderation::kick(),
        moderation::timeout(),
        moderation::role(),
        info::serverinfo(),
        info::help(),
        promo::ex(),
    ]
}

/// Command metadata in declaration order. `help` walks this map front to
/// back, so insertion order is the order users see.
pub fn command_metadata() -> IndexMap<&'static str, CommandMeta> {
    indexmap::indexmap! {
        "cl" => CommandMeta {
            usage: Some("!cl <amount>: ลบข้อความในช่อง (Clear messages in channel)"),
            admin_only: true,
        },
        "ban" => CommandMeta {
            usage: Some("!ban <@user> [reason]: แบนผู้ใช้จากเซิร์ฟเวอร์ (Ban a user from the server)"),
            admin_only: true,
        },
        "kick" => CommandMeta {
            usage: Some("!kick <@user> [reason]: เตะผู้ใช้จากเซิร์ฟเวอร์ (Kick a user from the server)"),
            admin_only: true,
        },
        "timeout" => CommandMeta {
            usage: Some("!timeout <@user> <duration>: ตั้งเวลาให้ผู้ใช้ (Timeout a user for a duration)"),
            admin_only: true,
        },
        "role" => CommandMeta {
            usage: Some("!role <add/remove> <@user> <role>: จัดการบทบาทของผู้ใช้ (Manage user roles)"),
            admin_only: true,
        },
        "serverinfo" => CommandMeta {
            usage: Some("!serverinfo แสดงข้อมูลเซิร์ฟเวอร์ (Show server info)"),
            admin_only: true,
        },
        "help" => CommandMeta {
            usage: Some("!help แสดงคำสั่งทั้งหมด (Show all commands)"),
            admin_only: false,
        },
        // Not listed by help
        "ex" => CommandMeta {
            usage: None,
            admin_only: true,
        },
    }
}

/// Usage line for a command, if it has one.
pub fn usage(command: &str) -> Option<&'static str> {
    command_metadata().get(command).and_then(|meta| meta.usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_command_has_metadata() {
        let metadata = command_metadata();
        let commands = raw_commands();

        assert_eq!(commands.len(), metadata.len());
        for command in &commands {
            assert!(
                metadata.contains_key(command.name.as_str()),
                "no metadata for {}",
                command.name
            );
        }
    }

    #[test]
    fn documented_commands_in_declaration_order() {
        let documented: Vec<&str> = command_metadata()
            .into_iter()
            .filter(|(_, meta)| meta.usage.is_some())
            .map(|(name, _)| name)
            .collect();

        assert_eq!(
            documented,
            ["cl", "ban", "kick", "timeout", "role", "serverinfo", "help"]
        );
    }

    #[test]
    fn help_is_the_only_public_command() {
        for (name, meta) in command_metadata() {
            assert_eq!(meta.admin_only, name != "help", "wrong flag for {}", name);
        }
    }

    #[test]
    fn ex_is_undocumented() {
        assert!(usage("ex").is_none());
        assert!(usage("timeout").is_some());
        assert!(usage("nosuchcommand").is_none());
    }
}
