//! Fire-and-forget notification job queue.
//!
//! Controllers never talk to the queue directly; services enqueue a [`Job`]
//! after a successful state change and move on. The contract is "enqueue
//! succeeds or the request still completes": if the worker is gone the job is
//! dropped with a warning, never an error surfaced to the client. A separate
//! worker loop renders and logs each notification; actual mail delivery sits
//! behind that boundary and is out of scope here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

/// Payload for the welcome notification sent on enrollment creation.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeMailPayload {
    pub student_name: String,
    pub student_email: String,
    pub plan_title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
}

/// Payload for the notification sent when a help order is answered.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerMailPayload {
    pub student_name: String,
    pub student_email: String,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub answer: String,
    pub answer_at: DateTime<Utc>,
}

/// A notification job handed off to the worker.
#[derive(Debug, Clone, Serialize)]
pub enum Job {
    WelcomeMail(WelcomeMailPayload),
    AnswerMail(AnswerMailPayload),
}

impl Job {
    /// Stable key identifying the job kind, used as the log field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::WelcomeMail(_) => "welcome_mail",
            Self::AnswerMail(_) => "answer_mail",
        }
    }
}

/// Handle for enqueueing notification jobs.
///
/// Cheap to clone (wraps a channel sender). Created once at startup via
/// [`JobQueue::start`], which also spawns the worker task.
#[derive(Clone)]
pub struct JobQueue {
    tx: mpsc::UnboundedSender<Job>,
}

impl JobQueue {
    /// Creates a queue together with its receiving end.
    ///
    /// Used by [`JobQueue::start`] and by tests that want to observe exactly
    /// which jobs were enqueued.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Job>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Creates the queue and spawns the worker task processing its jobs.
    pub fn start() -> Self {
        let (queue, mut rx) = Self::channel();

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                deliver(&job);
            }
            tracing::info!("Notification worker shutting down");
        });

        queue
    }

    /// Enqueues a job without blocking.
    ///
    /// Never fails the caller: if the worker has shut down the job is dropped
    /// and a warning is logged.
    pub fn enqueue(&self, job: Job) {
        let key = job.key();
        if self.tx.send(job).is_err() {
            tracing::warn!(job = key, "Notification queue unavailable, dropping job");
        }
    }
}

/// Renders a job into its log-line notification.
fn deliver(job: &Job) {
    match serde_json::to_string(job) {
        Ok(payload) => tracing::info!(job = job.key(), %payload, "Delivering notification"),
        Err(e) => tracing::error!(job = job.key(), "Failed to render notification: {e}"),
    }
}
