//! Built-in message templates.

use super::MessageKey::{self, *};
use hoopfacts_core::locale::Locale;

const ES: &[(MessageKey, &str)] = &[
    (
        Welcome,
        "¡Hola Arlette! Gracias por usar Curiosidades del Baloncesto, para comenzar puedes decir: datos sobre el basquet, hablame sobre el basquet... Para detener di ¡Cancela!",
    ),
    (GetFact, "Aquí te va un dato Arlette... "),
    (
        Help,
        "Puedes decir: hablame sobre el basquet. ¿Cómo te puedo ayudar?",
    ),
    (Goodbye, "¡Adiós Arlette!"),
    (
        Fallback,
        "Lo siento, no sé sobre eso. Por favor, inténtalo de nuevo.",
    ),
    (
        Error,
        "Lo siento, tuve problemas para hacer lo que pediste. Por favor, inténtalo de nuevo.",
    ),
    (Reflector, "Acabas de activar %s"),
];

const EN: &[(MessageKey, &str)] = &[
    (
        Welcome,
        "Hello Arlette! Thank you for using Basketball Curiosities, to start you can say: facts about basketball, tell me about basketball... To stop say Cancel!",
    ),
    (GetFact, "A fun fact is Arlette... "),
    (Help, "You can say: tell me about basketball. How can I help?"),
    (Goodbye, "Goodbye!"),
    (Fallback, "Sorry, I don't know about that. Please try again."),
    (
        Error,
        "Sorry, I had trouble doing what you asked. Please try again.",
    ),
    (Reflector, "You just triggered %s"),
];

pub(super) const LANGUAGE_STRINGS: &[(Locale, &[(MessageKey, &str)])] =
    &[(Locale::Es, ES), (Locale::En, EN)];
