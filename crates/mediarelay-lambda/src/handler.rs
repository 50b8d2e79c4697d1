//! Function handler: one SQS batch per invocation

use aws_lambda_events::event::sqs::{SqsEvent, SqsMessage};
use lambda_runtime::{Error, LambdaEvent};
use mediarelay_worker::{Dispatcher, QueueMessage, StatusResult};

pub async fn handle_batch(
    dispatcher: &Dispatcher,
    event: LambdaEvent<SqsEvent>,
) -> Result<StatusResult, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        records = event.payload.records.len(),
        "Invocation received"
    );
    dispatch_event(dispatcher, event.payload).await
}

/// Dispatch every record; a batch-scoped failure fails the invocation.
pub async fn dispatch_event(
    dispatcher: &Dispatcher,
    event: SqsEvent,
) -> Result<StatusResult, Error> {
    let messages: Vec<QueueMessage> = event.records.into_iter().map(queue_message).collect();

    let report = dispatcher.dispatch_batch(&messages).await?;
    Ok(report.status())
}

fn queue_message(message: SqsMessage) -> QueueMessage {
    QueueMessage {
        message_id: message.message_id,
        body: message.body,
    }
}
