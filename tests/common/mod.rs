#![allow(dead_code)]

use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema, Set,
};

pub mod country {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "countries")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl queryable::RelationGraph for Entity {
        fn table(&self) -> &str {
            sea_orm::EntityName::table_name(self)
        }

        fn relation(&self, _name: &str) -> Option<queryable::Relation> {
            None
        }
    }
}

pub mod user {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub name: String,
        pub country_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::country::Entity",
            from = "Column::CountryId",
            to = "super::country::Column::Id"
        )]
        Country,
        #[sea_orm(has_many = "super::post::Entity")]
        Posts,
    }

    impl Related<super::country::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Country.def()
        }
    }

    impl Related<super::post::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Posts.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl queryable::RelationGraph for Entity {
        fn table(&self) -> &str {
            sea_orm::EntityName::table_name(self)
        }

        fn relation(&self, name: &str) -> Option<queryable::Relation> {
            match name {
                "country" => Some(queryable::Relation::from_def(
                    &Relation::Country.def(),
                    &super::country::Entity,
                )),
                "posts" => Some(queryable::Relation::from_def(
                    &Relation::Posts.def(),
                    &super::post::Entity,
                )),
                _ => None,
            }
        }
    }
}

pub mod post {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "posts")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub title: String,
        pub user_id: i32,
        pub published: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id"
        )]
        Author,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Author.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl queryable::RelationGraph for Entity {
        fn table(&self) -> &str {
            sea_orm::EntityName::table_name(self)
        }

        fn relation(&self, name: &str) -> Option<queryable::Relation> {
            match name {
                "author" => Some(queryable::Relation::from_def(
                    &Relation::Author.def(),
                    &super::user::Entity,
                )),
                _ => None,
            }
        }
    }

    impl queryable::Queryable for Entity {
        fn queryable_config() -> queryable::QueryableConfig {
            queryable::QueryableConfig::new()
                .with_columns(["posts.title", "users.name"])
                .join("users", "posts.user_id", "users.id")
                .join("countries", "users.country_id", "countries.id")
        }
    }
}

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    db.execute(backend.build(&schema.create_table_from_entity(country::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(user::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(post::Entity)))
        .await?;

    seed(&db).await?;
    Ok(db)
}

/// Countries: Chile (1), Norway (2).
/// Users: Alice (Norway), Bob (Chile), Tess Tester (Norway).
/// Posts: 1 "Test driven design" by Bob, 2 "Cooking pasta" by Alice,
/// 3 "Gardening notes" by Tess Tester, 4 "Latest news" by Alice (unpublished).
async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    country::Entity::insert_many([
        country::ActiveModel {
            id: Set(1),
            name: Set("Chile".to_string()),
        },
        country::ActiveModel {
            id: Set(2),
            name: Set("Norway".to_string()),
        },
    ])
    .exec(db)
    .await?;

    user::Entity::insert_many([
        user::ActiveModel {
            id: Set(1),
            name: Set("Alice".to_string()),
            country_id: Set(2),
        },
        user::ActiveModel {
            id: Set(2),
            name: Set("Bob".to_string()),
            country_id: Set(1),
        },
        user::ActiveModel {
            id: Set(3),
            name: Set("Tess Tester".to_string()),
            country_id: Set(2),
        },
    ])
    .exec(db)
    .await?;

    post::Entity::insert_many([
        post::ActiveModel {
            id: Set(1),
            title: Set("Test driven design".to_string()),
            user_id: Set(2),
            published: Set(true),
        },
        post::ActiveModel {
            id: Set(2),
            title: Set("Cooking pasta".to_string()),
            user_id: Set(1),
            published: Set(true),
        },
        post::ActiveModel {
            id: Set(3),
            title: Set("Gardening notes".to_string()),
            user_id: Set(3),
            published: Set(true),
        },
        post::ActiveModel {
            id: Set(4),
            title: Set("Latest news".to_string()),
            user_id: Set(1),
            published: Set(false),
        },
    ])
    .exec(db)
    .await?;

    Ok(())
}

pub fn ids(posts: &[post::Model]) -> Vec<i32> {
    posts.iter().map(|post| post.id).collect()
}
