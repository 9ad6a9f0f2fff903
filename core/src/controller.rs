//! Post form + list controller.
//!
//! # Design
//! `Controller` owns the only mutable UI state: the `FormState` and the
//! `PostListStore`. Every event is a method; the network-bound ones are
//! `async` and take `&mut self`, so two handlers can never interleave on the
//! same controller.
//!
//! Mutations follow one policy: send the request once, reset the form
//! (submits only), then refetch the list whether or not the send succeeded.
//! Failures are logged and handed back in a `Dispatch`; none of them abort
//! the sequence.

use tracing::{debug, error};

use crate::client::PostClient;
use crate::error::ApiError;
use crate::form::{Field, FormMode, FormState, Mutation, SubmitRejection};
use crate::http::HttpRequest;
use crate::store::PostListStore;
use crate::transport::Transport;
use crate::types::{Post, PostId};

/// Result of a mutation and the refetch that followed it.
#[derive(Debug)]
pub struct Dispatch {
    pub mutation: Result<(), ApiError>,
    pub refresh: Result<(), ApiError>,
}

impl Dispatch {
    pub fn is_ok(&self) -> bool {
        self.mutation.is_ok() && self.refresh.is_ok()
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent; the form now carries the field errors.
    Rejected(SubmitRejection),
    Dispatched(Dispatch),
}

pub struct Controller<T> {
    client: PostClient,
    transport: T,
    form: FormState,
    store: PostListStore,
}

impl<T: Transport> Controller<T> {
    pub fn new(client: PostClient, transport: T) -> Self {
        Self {
            client,
            transport,
            form: FormState::new(),
            store: PostListStore::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn posts(&self) -> &[Post] {
        self.store.posts()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Initial load.
    pub async fn mount(&mut self) -> Result<(), ApiError> {
        self.refresh().await
    }

    /// Refetch the list and swap the snapshot. On failure the previous
    /// snapshot is kept.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_posts();
        let result = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_list_posts(response),
            Err(e) => Err(e),
        };
        match result {
            Ok(posts) => {
                debug!(count = posts.len(), "post list refreshed");
                self.store.replace(posts);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "error fetching posts");
                Err(e)
            }
        }
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// "Update" on a list entry. Returns false if the id is not in the list.
    pub fn select_update(&mut self, id: &PostId) -> bool {
        self.select(id, FormMode::Replace)
    }

    /// "Partial Update" on a list entry. Returns false if the id is not in
    /// the list.
    pub fn select_partial_update(&mut self, id: &PostId) -> bool {
        self.select(id, FormMode::PartialUpdate)
    }

    fn select(&mut self, id: &PostId, mode: FormMode) -> bool {
        match self.store.find(id) {
            Some(post) => {
                self.form.select(post, mode);
                true
            }
            None => false,
        }
    }

    /// Drop the draft and return to create mode without sending anything.
    pub fn cancel(&mut self) {
        self.form.reset();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let mutation = match self.form.prepare_submit() {
            Ok(mutation) => mutation,
            Err(rejection) => {
                debug!(?rejection, "submit rejected");
                return SubmitOutcome::Rejected(rejection);
            }
        };

        let sent = self.send(&mutation).await;
        self.form.reset();
        let refreshed = self.refresh().await;

        SubmitOutcome::Dispatched(Dispatch {
            mutation: sent,
            refresh: refreshed,
        })
    }

    /// "Delete" on a list entry. Leaves the form untouched.
    pub async fn delete(&mut self, id: PostId) -> Dispatch {
        let sent = self.send(&Mutation::Delete(id)).await;
        let refreshed = self.refresh().await;
        Dispatch {
            mutation: sent,
            refresh: refreshed,
        }
    }

    async fn send(&self, mutation: &Mutation) -> Result<(), ApiError> {
        let result = self.execute_mutation(mutation).await;
        if let Err(e) = &result {
            error!(error = %e, action = mutation.action(), "error sending post mutation");
        }
        result
    }

    async fn execute_mutation(&self, mutation: &Mutation) -> Result<(), ApiError> {
        let request = self.build_request(mutation)?;
        debug!(method = %request.method, path = %request.path, "sending mutation");
        let response = self.transport.execute(request).await?;
        // The list is refetched afterwards, so only the status matters.
        self.client.parse_mutation_ack(response)
    }

    fn build_request(&self, mutation: &Mutation) -> Result<HttpRequest, ApiError> {
        match mutation {
            Mutation::Create(input) => self.client.build_create_post(input),
            Mutation::Replace(id, input) => self.client.build_replace_post(id, input),
            Mutation::Patch(id, patch) => self.client.build_patch_post(id, patch),
            Mutation::Delete(id) => Ok(self.client.build_delete_post(id)),
        }
    }
}
