use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(50).not_null())
                    .col(ColumnDef::new(People::Gender).string_len(50).not_null())
                    .col(ColumnDef::new(People::Height).string_len(50).not_null())
                    .col(ColumnDef::new(People::HairColor).string_len(50).not_null())
                    .col(ColumnDef::new(People::EyeColor).string_len(50).not_null())
                    .col(ColumnDef::new(People::BirthYear).string_len(50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
    Gender,
    Height,
    HairColor,
    EyeColor,
    BirthYear,
}
