use async_graphql::{InputObject, SimpleObject, ID};

/// Every field is nullable: a lookup miss renders as an empty record.
#[derive(SimpleObject, Clone, Debug, Default)]
#[graphql(complex)]
pub struct Actor {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
}

impl From<infra::ActorRow> for Actor {
    fn from(row: infra::ActorRow) -> Self {
        Self {
            id: Some(row.id.into()),
            name: Some(row.name),
            gender: row.gender,
            age: row.age,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct ActorInput {
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
}

impl From<ActorInput> for infra::NewActor {
    fn from(input: ActorInput) -> Self {
        Self {
            name: input.name,
            gender: input.gender,
            age: input.age,
        }
    }
}
