use fastmigration::prelude::{Column, Migration, SchemaResult, Table};

pub struct GendersMigration;

impl Migration for GendersMigration {
    fn name(&self) -> &str {
        "create_genders_table"
    }

    fn table(&self) -> SchemaResult<Table> {
        let id = Column::create()
            .column("id")
            .data_type("INT")
            .nullable(false)
            .length(11)
            .primary_key()
            .auto_increment();
        let gender = Column::create()
            .column("gender")
            .data_type("enum")
            .enum_values(["Men", "Women"])
            .nullable_enum();

        Ok(Table::new("genders").columns([id, gender]))
    }
}
