use crate::modules::traits::CommandBuilder;
use crate::util::command::CommandWrapper;
use crate::util::objects::configuration::{ConnectionConfig, Tools};
use crate::util::objects::tables::TableFilter;

/// Commands for the MySQL client tools (`mysqldump` and `mysql`)
pub struct MySql {
    dump_tool: String,
    client_tool: String
}

impl MySql {
    pub fn new(tools: &Tools) -> Self {
        MySql {
            dump_tool: tools.dump.clone(),
            client_tool: tools.client.clone()
        }
    }

    fn with_login(&self, program: &str, config: &ConnectionConfig) -> CommandWrapper {
        let mut cmd = CommandWrapper::new(program);
        cmd.arg_str("-u")
            .arg_str(&config.username)
            // Password has to be attached directly to the flag
            .arg_secret("-p", &config.password)
            .arg_str("-h")
            .arg_str(&config.host)
            .arg_str("-P")
            .arg_string(config.port.to_string());
        cmd
    }

    fn client_statement(&self, config: &ConnectionConfig, statement: String) -> (CommandWrapper, String) {
        (self.with_login(&self.client_tool, config), statement)
    }
}

impl CommandBuilder for MySql {
    fn dump(&self, config: &ConnectionConfig, database: &str, filter: &TableFilter) -> CommandWrapper {
        let mut cmd = self.with_login(&self.dump_tool, config);

        // GTID purge info would break restores on servers with another replication state
        cmd.arg_str("--set-gtid-purged=OFF")
            .arg_str("--triggers")
            .arg_str("--routines")
            .arg_str(database);

        for table in filter.include.iter() {
            cmd.arg_str(table);
        }
        for table in filter.exclude.iter() {
            cmd.arg_string(format!("--ignore-table={}.{}", database, table));
        }

        cmd
    }

    fn restore(&self, config: &ConnectionConfig, database: &str) -> CommandWrapper {
        let mut cmd = self.with_login(&self.client_tool, config);
        cmd.arg_str("-A")
            .arg_string(format!("-D{}", database));
        cmd
    }

    fn create(&self, config: &ConnectionConfig, database: &str) -> (CommandWrapper, String) {
        self.client_statement(config, format!("CREATE DATABASE {};", database))
    }

    fn drop(&self, config: &ConnectionConfig, database: &str) -> (CommandWrapper, String) {
        self.client_statement(config, format!("DROP DATABASE {};", database))
    }
}
