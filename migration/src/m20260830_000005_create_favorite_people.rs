use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FavoritePeople::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(FavoritePeople::PersonId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoritePeople::UserId)
                            .col(FavoritePeople::PersonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoritePeople::Table, FavoritePeople::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoritePeople::Table, FavoritePeople::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePeople::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FavoritePeople {
    Table,
    UserId,
    PersonId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum People {
    Table,
    Id,
}
