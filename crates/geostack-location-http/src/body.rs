//! Body of an outgoing location request.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body::{Body, Frame, SizeHint};
use http_body_util::{BodyExt, Full};

/// Body of a location request: the serialized members, a raw payload member,
/// or nothing when every member was bound to the path, query, or headers.
#[derive(Debug, Default)]
pub struct LocationBody {
    content: Option<Full<Bytes>>,
}

impl LocationBody {
    /// Body carrying a raw payload member as-is.
    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self {
            content: Some(Full::new(data.into())),
        }
    }

    /// Body carrying the JSON document of the body-bound members.
    #[must_use]
    pub fn from_json(json: Vec<u8>) -> Self {
        Self::from_bytes(json)
    }

    /// Body for a request without body-bound members.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bytes that go on the wire.
    pub async fn into_bytes(self) -> Bytes {
        let Some(full) = self.content else {
            return Bytes::new();
        };
        match full.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(never) => match never {},
        }
    }
}

impl Body for LocationBody {
    type Data = Bytes;
    type Error = std::convert::Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, Self::Error>>> {
        match self.get_mut().content.as_mut() {
            Some(full) => Pin::new(full).poll_frame(cx),
            None => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        self.content.as_ref().is_none_or(Full::is_end_stream)
    }

    fn size_hint(&self) -> SizeHint {
        self.content
            .as_ref()
            .map_or_else(|| SizeHint::with_exact(0), Full::size_hint)
    }
}
