//! Conversation lifecycle and intent resolution of the support assistant.

use chamba_match::assistant::{Assistant, DialogueDispatcher, Intent, IntentRule, IntentRuleTable, Sender};
use chamba_match::{AppConfig, AssistantError};
use pretty_assertions::assert_eq;

fn opened() -> Assistant {
    let mut assistant = Assistant::from_config(&AppConfig::default());
    assistant.open();
    assistant
}

/// Opening a fresh session seeds exactly one greeting from the bot.
#[test]
fn open_seeds_greeting() {
    let assistant = opened();
    let transcript = assistant.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].sender, Sender::Bot);
    assert_eq!(transcript[0].text, "¡Hola! Soy ChambaBot, ¿cómo puedo ayudarte hoy?");
}

/// A submitted message adds the user line and one bot answer.
#[test]
fn submit_appends_user_and_bot_messages() {
    let mut assistant = opened();
    let intent = assistant.submit_user_message("busco empleos").unwrap();
    assert_eq!(intent, Intent::JobPostings);

    let transcript = assistant.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].sender, Sender::User);
    assert_eq!(transcript[1].text, "busco empleos");
    assert_eq!(transcript[2].sender, Sender::Bot);
    assert_eq!(transcript[2].text, Intent::JobPostings.reply());
}

/// "publicar empleo" reaches the post-job rule; a message without the phrase does not.
#[test]
fn post_job_versus_job_postings() {
    let mut assistant = opened();
    assert_eq!(assistant.submit_user_message("Quiero publicar empleo").unwrap(), Intent::PostJob);
    assert_eq!(assistant.submit_user_message("busco empleos").unwrap(), Intent::JobPostings);
    assert_eq!(assistant.submit_user_message("¿Cómo publico un empleo?").unwrap(), Intent::Fallback);
}

/// Empty and unmatched input still get exactly one answer.
#[test]
fn every_input_gets_one_reply() {
    let mut assistant = opened();
    for text in ["", "   ", "qwerty", "?!"] {
        let before = assistant.transcript().len();
        assert_eq!(assistant.submit_user_message(text).unwrap(), Intent::Fallback);
        assert_eq!(assistant.transcript().len(), before + 2);
    }
}

/// Closing drops the transcript and token; reopening greets once.
#[test]
fn close_and_reopen_starts_over() {
    let mut assistant = opened();
    assistant.submit_user_message("hola").unwrap();
    let first_session = assistant.state().session();

    assistant.close();
    assert_eq!(assistant.transcript().len(), 0);
    assert_ne!(assistant.state().session(), first_session);

    assistant.open();
    assert_eq!(assistant.transcript().len(), 1);
    assert_eq!(assistant.transcript()[0].sender, Sender::Bot);
}

/// Opening twice does not greet twice.
#[test]
fn reopening_an_open_session_is_a_no_op() {
    let mut assistant = opened();
    assistant.submit_user_message("servicios").unwrap();
    assistant.open();
    assert_eq!(assistant.transcript().len(), 3);
}

/// Nothing can be submitted while the chat is closed.
#[test]
fn closed_session_rejects_messages() {
    let mut assistant = Assistant::default();
    assert_eq!(assistant.submit_user_message("hola"), Err(AssistantError::SessionClosed));
    assert!(assistant.transcript().is_empty());
}

/// The host can re-seed the conversation under another name.
#[test]
fn initialize_conversation_replaces_transcript() {
    let mut assistant = opened();
    assistant.submit_user_message("testimonios").unwrap();

    assistant.initialize_conversation("Chambita", "¡Buenas!");
    assert_eq!(assistant.bot_name(), "Chambita");
    assert_eq!(assistant.transcript().len(), 1);
    assert_eq!(assistant.transcript()[0].text, "¡Buenas!");
}

/// Table order decides ties: swapping two rules swaps the answer.
#[test]
fn custom_table_order_is_the_contract() {
    let greeting_first = IntentRuleTable::new(vec![
        IntentRule::new(Intent::Greeting, ["hola"]).unwrap(),
        IntentRule::new(Intent::JobPostings, ["empleos"]).unwrap(),
    ]);
    let jobs_first = IntentRuleTable::new(vec![
        IntentRule::new(Intent::JobPostings, ["empleos"]).unwrap(),
        IntentRule::new(Intent::Greeting, ["hola"]).unwrap(),
    ]);

    let mut a = opened().with_dispatcher(DialogueDispatcher::new(greeting_first));
    let mut b = opened().with_dispatcher(DialogueDispatcher::new(jobs_first));
    assert_eq!(a.submit_user_message("hola, busco empleos").unwrap(), Intent::Greeting);
    assert_eq!(b.submit_user_message("hola, busco empleos").unwrap(), Intent::JobPostings);
}
