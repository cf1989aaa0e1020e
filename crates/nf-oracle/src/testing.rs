//! Scripted oracle for tests of code that drives an [`Oracle`]

use crate::error::OracleResult;
use crate::traits::Oracle;
use async_trait::async_trait;
use nf_core::{OracleRequest, OracleResponse};
use std::sync::Mutex;

type Script = Box<dyn Fn(&OracleRequest) -> OracleResult<OracleResponse> + Send + Sync>;

/// Oracle answering from a closure and recording every request it sees
pub struct ScriptedOracle {
    script: Script,
    requests: Mutex<Vec<OracleRequest>>,
}

impl ScriptedOracle {
    pub fn new(
        script: impl Fn(&OracleRequest) -> OracleResult<OracleResponse> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Oracle giving the same response to every request
    pub fn always(response: OracleResponse) -> Self {
        Self::new(move |_| Ok(response.clone()))
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<OracleRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn execute(&self, request: &OracleRequest) -> OracleResult<OracleResponse> {
        self.requests.lock().unwrap().push(request.clone());
        (self.script)(request)
    }

    fn engine_name(&self) -> &'static str {
        "scripted"
    }
}
