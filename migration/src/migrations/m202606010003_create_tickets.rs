use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202606010003_create_tickets"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // userid/eventid are opaque strings with no foreign keys; the schema is
    // dormant until ticket-issuing functionality exists.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("tickets"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("userid")).string().not_null())
                    .col(ColumnDef::new(Alias::new("eventid")).string().not_null())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("email")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("eventname"))
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("eventdate")).date().not_null())
                    .col(
                        ColumnDef::new(Alias::new("eventtime"))
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("ticketprice"))
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("qr")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("count"))
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Alias::new("updated_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("tickets")).to_owned())
            .await
    }
}
