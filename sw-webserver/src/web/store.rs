use std::{ops::Deref, sync::Arc};

use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use sw_core::Db;

/// Shared handle to the user/channel store.
#[derive(Clone)]
pub struct Store(Arc<dyn Db + Send + Sync>);

impl Store {
    pub fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self(db)
    }
}

impl Deref for Store {
    type Target = dyn Db + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Store {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let store = try_outcome!(request.guard::<&State<Store>>().await);
        Outcome::Success(store.inner().clone())
    }
}
