use std::fmt;
use std::process::Command;

const MASK: &str = "******";

/// Argument vector of an external command. Secret arguments are passed to the
/// process as given, but rendered masked whenever the command is displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandWrapper {
    base: String,
    args: Vec<String>,
    shown: Vec<String>
}

impl CommandWrapper {
    pub fn new(cmd: &str) -> CommandWrapper {
        CommandWrapper {
            base: cmd.to_string(),
            args: vec![],
            shown: vec![]
        }
    }

    pub fn arg_str(&mut self, arg: &str) -> &mut CommandWrapper {
        self.arg_string(arg.to_string())
    }

    pub fn arg_string(&mut self, option: String) -> &mut CommandWrapper {
        self.shown.push(option.clone());
        self.args.push(option);
        self
    }

    /// Append `prefix` and `secret` as one argument, e.g. `-p<password>`
    pub fn arg_secret(&mut self, prefix: &str, secret: &str) -> &mut CommandWrapper {
        self.args.push(format!("{}{}", prefix, secret));
        self.shown.push(format!("{}{}", prefix, MASK));
        self
    }

    pub fn program(&self) -> &str {
        self.base.as_str()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by all arguments, unmasked
    #[cfg(test)]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.base.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.base);
        command.args(self.args());
        command
    }
}

impl fmt::Display for CommandWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for arg in self.shown.iter() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
