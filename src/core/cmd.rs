use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Side effects requested by the update function and executed by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    Batch(Vec<Cmd>),
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands: Vec<Cmd> = commands
            .into_iter()
            .filter(|cmd| *cmd != Cmd::None)
            .collect();
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Flatten nested batches into the commands they contain
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => vec![],
            cmd => vec![cmd],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resize() -> Cmd {
        Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        })
    }

    #[test]
    fn test_batch() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, resize()]), resize());
        assert_eq!(
            Cmd::batch(vec![resize(), Cmd::Tui(TuiCommand::Suspend)]),
            Cmd::Batch(vec![resize(), Cmd::Tui(TuiCommand::Suspend)])
        );
    }

    #[test]
    fn test_flatten() {
        let nested = Cmd::Batch(vec![
            resize(),
            Cmd::None,
            Cmd::Batch(vec![Cmd::Tui(TuiCommand::Suspend)]),
        ]);
        assert_eq!(
            nested.flatten(),
            vec![resize(), Cmd::Tui(TuiCommand::Suspend)]
        );
    }
}
