use fastmigration::prelude::{Charset, Column, Constraint, Engine, Migration, SchemaResult, Table};

pub struct UsersMigration;

impl Migration for UsersMigration {
    fn name(&self) -> &str {
        "create_users_table"
    }

    fn table(&self) -> SchemaResult<Table> {
        let id = Column::create()
            .column("id")
            .data_type("INT")
            .nullable(false)
            .length(11)
            .primary_key()
            .auto_increment();
        let name = Column::create()
            .column("name")
            .data_type("VARCHAR")
            .nullable(true)
            .length(75);
        let gender = Column::create().column("gender").data_type("INT").length(11);
        let created_at = Column::create()
            .column("created_at")
            .data_type("TIMESTAMP")
            .default_current_timestamp();
        let updated_at = Column::create()
            .column("updated_at")
            .data_type("TIMESTAMP")
            .nullable_timestamp();

        let constraint = Constraint::add()
            .foreign_key(["gender"])
            .references(["id"])
            .on(["genders"])?;

        Ok(Table::new("users")
            .columns([id, name, gender, created_at, updated_at])
            .constraint(constraint)
            .engine(Engine::InnoDB)
            .charset(Charset::Utf8mb4))
    }
}
