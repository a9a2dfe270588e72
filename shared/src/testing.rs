//! ==============================================================================
//! testing.rs - test doubles
//! ==============================================================================
//!
//! purpose:
//!     scripted transport, recording notifier and fixtures shared by the
//!     unit tests.
//!
//! ==============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::client::{HttpReply, Transport};
use crate::endpoints::Method;
use crate::error::ClientError;
use crate::model::{Activity, ActivityDetails, Snapshot};
use crate::notice::{Notice, Notifier};

/// replays scripted replies in order and records every request
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpReply, ClientError>>>,
    requests: RefCell<Vec<(Method, String)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply::new(status, body)));
    }

    pub fn push_failure(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(ClientError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, method: Method, url: &str) -> Result<HttpReply, ClientError> {
        self.requests.borrow_mut().push((method, url.to_string()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted reply".into())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// `{"Chess Club": {description: "d", schedule: "Mon", max_participants: 2, participants: ["a@x.com"]}}`
pub fn chess_club() -> Snapshot {
    let details = ActivityDetails {
        description: "d".into(),
        schedule: "Mon".into(),
        max_participants: 2,
        participants: vec!["a@x.com".into()],
    };
    std::iter::once(Activity::from_details("Chess Club", details)).collect()
}
