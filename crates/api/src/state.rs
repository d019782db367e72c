use std::sync::Arc;

use infra::db::Db;
use infra::repos::{ActorRepo, MovieRepo};
use infra::{fixtures, ActorRow, MemoryRepo, MovieRow, Repository};

use crate::auth::{AuthConfig, JwtService};
use crate::events::EventBus;

pub type MovieStore = Arc<dyn Repository<MovieRow>>;
pub type ActorStore = Arc<dyn Repository<ActorRow>>;

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieStore,
    pub actors: ActorStore,
    pub events: EventBus,
    /// Present only for the PostgreSQL backend; used by the health probe.
    pub db: Option<Db>,
    jwt_service: JwtService,
}

impl AppState {
    pub fn new(movies: MovieStore, actors: ActorStore, auth_config: &AuthConfig) -> Self {
        Self {
            movies,
            actors,
            events: EventBus::new(),
            db: None,
            jwt_service: JwtService::new(auth_config),
        }
    }

    /// Fixture-backed state seeded with the demo catalog.
    pub fn in_memory(auth_config: &AuthConfig) -> Self {
        Self::new(
            Arc::new(MemoryRepo::new(fixtures::movies())),
            Arc::new(MemoryRepo::new(fixtures::actors())),
            auth_config,
        )
    }

    pub fn postgres(db: Db, auth_config: &AuthConfig) -> Self {
        let mut state = Self::new(
            Arc::new(MovieRepo::new(db.clone())),
            Arc::new(ActorRepo::new(db.clone())),
            auth_config,
        );
        state.db = Some(db);
        state
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
