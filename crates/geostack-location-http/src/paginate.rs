//! Pagination over list and history operations.
//!
//! A [`Paginator`] re-sends the same input with only `NextToken` changed until
//! the service stops returning a token. A token that was already sent during
//! the walk ends it instead of looping forever.

use std::collections::HashSet;

use futures::Stream;
use futures::stream;
use geostack_location_model::input::{
    GetDevicePositionHistoryInput, ListDevicePositionsInput, ListGeofenceCollectionsInput,
    ListGeofencesInput, ListMapsInput, ListPlaceIndexesInput, ListRouteCalculatorsInput,
    ListTrackerConsumersInput, ListTrackersInput,
};
use geostack_location_model::operations::LocationInput;
use geostack_location_model::output::{
    GetDevicePositionHistoryOutput, ListDevicePositionsOutput, ListGeofenceCollectionsOutput,
    ListGeofencesOutput, ListMapsOutput, ListPlaceIndexesOutput, ListRouteCalculatorsOutput,
    ListTrackerConsumersOutput, ListTrackersOutput,
};
use geostack_location_model::types::{
    DevicePosition, ListDevicePositionsResponseEntry, ListGeofenceCollectionsResponseEntry,
    ListGeofenceResponseEntry, ListMapsResponseEntry, ListPlaceIndexesResponseEntry,
    ListRouteCalculatorsResponseEntry, ListTrackersResponseEntry,
};
use tracing::warn;

use crate::client::{HttpTransport, LocationClient};
use crate::error::SdkError;
use crate::response::FromLocationResponse;

/// An input that accepts a continuation token.
pub trait PaginatedInput: LocationInput<Output: PaginatedOutput> {
    /// The token this input will send.
    fn next_token(&self) -> Option<&str>;

    /// Replace the token.
    fn set_next_token(&mut self, token: Option<String>);
}

/// An output that may carry a continuation token.
pub trait PaginatedOutput {
    /// Element type of a page.
    type Item;

    /// Token for the following page.
    fn next_token(&self) -> Option<&str>;

    /// Consume the page into its elements.
    fn into_items(self) -> Vec<Self::Item>;
}

macro_rules! impl_paginated {
    ($($input:ty => $output:ty, $items:ident: $item:ty;)+) => {
        $(
            impl PaginatedInput for $input {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }
            }

            impl PaginatedOutput for $output {
                type Item = $item;

                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn into_items(self) -> Vec<$item> {
                    self.$items
                }
            }
        )+
    };
}

impl_paginated! {
    ListTrackersInput => ListTrackersOutput, entries: ListTrackersResponseEntry;
    ListTrackerConsumersInput => ListTrackerConsumersOutput, consumer_arns: String;
    ListDevicePositionsInput => ListDevicePositionsOutput, entries: ListDevicePositionsResponseEntry;
    GetDevicePositionHistoryInput => GetDevicePositionHistoryOutput, device_positions: DevicePosition;
    ListGeofenceCollectionsInput => ListGeofenceCollectionsOutput,
        entries: ListGeofenceCollectionsResponseEntry;
    ListGeofencesInput => ListGeofencesOutput, entries: ListGeofenceResponseEntry;
    ListMapsInput => ListMapsOutput, entries: ListMapsResponseEntry;
    ListPlaceIndexesInput => ListPlaceIndexesOutput, entries: ListPlaceIndexesResponseEntry;
    ListRouteCalculatorsInput => ListRouteCalculatorsOutput,
        entries: ListRouteCalculatorsResponseEntry;
}

/// Walks the pages of a list operation.
#[derive(Debug)]
pub struct Paginator<'a, T, I> {
    client: &'a LocationClient<T>,
    input: I,
    sent: HashSet<String>,
    done: bool,
}

impl<'a, T, I> Paginator<'a, T, I>
where
    T: HttpTransport,
    I: PaginatedInput,
    I::Output: FromLocationResponse,
{
    /// Start paging from `input`, including its token if one is set.
    #[must_use]
    pub fn new(client: &'a LocationClient<T>, input: I) -> Self {
        Self {
            client,
            input,
            sent: HashSet::new(),
            done: false,
        }
    }

    /// Fetch the next page, or `None` once the walk is over.
    ///
    /// An error ends the walk.
    pub async fn next_page(&mut self) -> Option<Result<I::Output, SdkError>> {
        if self.done {
            return None;
        }

        if let Some(token) = self.input.next_token() {
            self.sent.insert(token.to_owned());
        }
        let page = match self.client.send(&self.input).await {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        match page.next_token().filter(|t| !t.is_empty()) {
            None => self.done = true,
            Some(token) if self.sent.contains(token) => {
                warn!(
                    operation = %I::OPERATION,
                    token,
                    "service returned a token that was already sent, stopping pagination"
                );
                self.done = true;
            }
            Some(token) => self.input.set_next_token(Some(token.to_owned())),
        }

        Some(Ok(page))
    }

    /// Expose the pages as a stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<I::Output, SdkError>> + 'a
    where
        I: 'a,
    {
        stream::unfold(self, |mut paginator| async move {
            let page = paginator.next_page().await?;
            Some((page, paginator))
        })
    }

    /// Collect every page.
    ///
    /// # Errors
    ///
    /// Returns the first error; pages fetched before it are dropped.
    pub async fn collect_pages(mut self) -> Result<Vec<I::Output>, SdkError> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await {
            pages.push(page?);
        }
        Ok(pages)
    }

    /// Collect the elements of every page, in page order.
    ///
    /// # Errors
    ///
    /// Returns the first error.
    pub async fn collect_items(
        self,
    ) -> Result<Vec<<I::Output as PaginatedOutput>::Item>, SdkError> {
        let pages = self.collect_pages().await?;
        Ok(pages
            .into_iter()
            .flat_map(PaginatedOutput::into_items)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use futures::StreamExt;
    use geostack_core::ClientConfig;
    use parking_lot::Mutex;

    use super::*;
    use crate::body::LocationBody;
    use crate::client::TransportFuture;
    use crate::error::TransportError;

    /// Replays canned bodies and records the tokens it was sent.
    #[derive(Debug, Clone, Default)]
    struct Pages {
        bodies: Arc<Mutex<VecDeque<&'static str>>>,
        sent: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl Pages {
        fn new(bodies: &[&'static str]) -> Self {
            Self {
                bodies: Arc::new(Mutex::new(bodies.iter().copied().collect())),
                sent: Arc::default(),
            }
        }
    }

    impl HttpTransport for Pages {
        fn send(&self, request: http::Request<LocationBody>) -> TransportFuture {
            let pages = self.clone();
            Box::pin(async move {
                let body = request.into_body().into_bytes().await;
                let doc: serde_json::Value = serde_json::from_slice(&body)?;
                pages
                    .sent
                    .lock()
                    .push(doc["NextToken"].as_str().map(str::to_owned));
                let next = pages.bodies.lock().pop_front().unwrap_or("{}");
                Ok::<_, TransportError>(http::Response::new(bytes::Bytes::from_static(
                    next.as_bytes(),
                )))
            })
        }
    }

    fn client(pages: Pages) -> LocationClient<Pages> {
        LocationClient::new(ClientConfig::default(), pages)
    }

    #[tokio::test]
    async fn test_should_follow_tokens_until_absent() {
        let pages = Pages::new(&[
            r#"{"Entries":[{"MapName":"a"}],"NextToken":"t1"}"#,
            r#"{"Entries":[{"MapName":"b"}],"NextToken":"t2"}"#,
            r#"{"Entries":[{"MapName":"c"}]}"#,
        ]);
        let client = client(pages.clone());
        let input = ListMapsInput {
            max_results: Some(1),
            ..Default::default()
        };
        let maps = client.paginate(input).collect_items().await.unwrap();
        let names: Vec<_> = maps.iter().map(|m| m.map_name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(*pages.sent.lock(), vec![
            None,
            Some("t1".to_owned()),
            Some("t2".to_owned())
        ]);
    }

    #[tokio::test]
    async fn test_should_stop_on_empty_token() {
        let pages = Pages::new(&[r#"{"Entries":[],"NextToken":""}"#, r#"{"Entries":[]}"#]);
        let client = client(pages.clone());
        let collected = client
            .paginate(ListTrackersInput::default())
            .collect_pages()
            .await
            .unwrap();
        assert_eq!(collected.len(), 1);
        assert_eq!(pages.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_should_stop_on_echoed_token() {
        let pages = Pages::new(&[
            r#"{"Entries":[],"NextToken":"same"}"#,
            r#"{"Entries":[],"NextToken":"same"}"#,
            r#"{"Entries":[],"NextToken":"same"}"#,
        ]);
        let client = client(pages.clone());
        let collected = client
            .paginate(ListGeofenceCollectionsInput::default())
            .collect_pages()
            .await
            .unwrap();
        assert_eq!(collected.len(), 2);
        assert_eq!(pages.sent.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_should_stop_on_alternating_tokens() {
        let pages = Pages::new(&[
            r#"{"Entries":[{"MapName":"a"}],"NextToken":"A"}"#,
            r#"{"Entries":[{"MapName":"b"}],"NextToken":"B"}"#,
            r#"{"Entries":[{"MapName":"c"}],"NextToken":"A"}"#,
            r#"{"Entries":[{"MapName":"d"}],"NextToken":"B"}"#,
        ]);
        let client = client(pages.clone());
        let maps = client
            .paginate(ListMapsInput::default())
            .collect_items()
            .await
            .unwrap();
        assert_eq!(maps.len(), 3);
        assert_eq!(*pages.sent.lock(), vec![
            None,
            Some("A".to_owned()),
            Some("B".to_owned())
        ]);
    }

    #[tokio::test]
    async fn test_should_stream_pages() {
        let pages = Pages::new(&[
            r#"{"ConsumerArns":["arn:a"],"NextToken":"t1"}"#,
            r#"{"ConsumerArns":["arn:b"]}"#,
        ]);
        let client = client(pages);
        let input = ListTrackerConsumersInput {
            tracker_name: "fleetA".to_owned(),
            ..Default::default()
        };
        let stream = client.paginate(input).into_stream();
        let pages: Vec<_> = stream.collect().await;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].as_ref().unwrap().consumer_arns, ["arn:b"]);
    }

    #[tokio::test]
    async fn test_should_end_walk_on_error() {
        let client = LocationClient::default();
        let mut paginator = client.paginate(ListMapsInput::default());
        assert!(matches!(
            paginator.next_page().await,
            Some(Err(SdkError::Transport(_)))
        ));
        assert!(paginator.next_page().await.is_none());
    }
}
