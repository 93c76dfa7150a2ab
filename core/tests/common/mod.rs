// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use storefront_admin_core::{ClientError, ErrorBody, RequestBody, ResourceClient};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, RequestBody),
    Put(String, RequestBody),
    Delete(String),
}

#[derive(Debug, Clone)]
pub enum Reply {
    Ok(Value),
    Status(u16, &'static str),
    Network(&'static str),
}

/// In-memory client that records every call and answers from a script.
/// An exhausted script answers `Value::Null`.
#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl RecordingClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn scripted(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into_iter().collect()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, call: Call) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(call);
        match self.replies.lock().unwrap().pop_front() {
            None => Ok(Value::Null),
            Some(Reply::Ok(value)) => Ok(value),
            Some(Reply::Status(code, message)) => Err(ClientError::HttpStatus {
                code,
                body: ErrorBody::with_message(message),
            }),
            Some(Reply::Network(cause)) => Err(ClientError::network(cause)),
        }
    }
}

#[async_trait]
impl ResourceClient for RecordingClient {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.answer(Call::Get(path.to_string()))
    }

    async fn post(&self, path: &str, body: RequestBody) -> Result<Value, ClientError> {
        self.answer(Call::Post(path.to_string(), body))
    }

    async fn put(&self, path: &str, body: RequestBody) -> Result<Value, ClientError> {
        self.answer(Call::Put(path.to_string(), body))
    }

    async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.answer(Call::Delete(path.to_string()))
    }
}
