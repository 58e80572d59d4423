//! # Messages
//!
//! Contains constant strings and format functions for the demo bot's replies.

// Greet
pub const GREET_REPLY: &str = "Hello to you too!";
pub const FAREWELL_REPLY: &str = "Goodbye to you too!";
pub const GREET_OPENING: &str = "Hello there!";

// FAQ
pub fn faq_answer(question: &str) -> String {
    format!("Just imagine I answered your question: {question}")
}

// Topic
pub const TOPIC_CAPABILITIES: &str = "I can answer FAQs, record three good things, and set timers!";
pub const TOPIC_OPENING: &str =
    "If you have nothing to talk about, ask me how to record three good things.";

// Gratitude
pub const GRATITUDE_START: &str = "Tell me three good things that happened today!";
pub const GRATITUDE_NEXT: &str = "Got it! What's the next good thing?";
pub const GRATITUDE_STOPPED: &str = "Alright, no good things today then.";

pub fn gratitude_summary(items: &[String]) -> String {
    format!("I remembered all three good things! {}", items.join(", "))
}

// Timer
pub const TIMER_ASK_DURATION: &str = "How long should the timer be? Tell me a number of seconds.";
pub const TIMER_CANCELLED: &str = "Okay, no timer then.";

pub fn timer_set(seconds: u64) -> String {
    format!("Timer set! I'll remind you in {seconds} seconds.")
}

pub fn timer_fired(seconds: u64) -> String {
    format!("⏰ Time's up! ({seconds}s)")
}

// Small talk
pub const SMALLTALK_FRIEND: &str = "I'm your good friend! Ask me what I can do?";
pub const SMALLTALK_LAUGH: &str = "If you're happy, I'm happy";
pub const SMALLTALK_SIGH: &str = "Huh?";
pub const SMALLTALK_SAD: &str = "Oh no, that sounds rough. I'm here for you.";
pub const SMALLTALK_ANGRY: &str = "Take a deep breath, it'll be okay.";
pub const SMALLTALK_LOST: &str = "I don't understand~";

pub fn smalltalk_echo(text: &str) -> String {
    format!("What do you mean, \"{text}\"?")
}
