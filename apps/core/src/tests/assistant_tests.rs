//! Assistant Tests
//!
//! Rule priority, fallback behavior, custom catalogs and the quick prompts.

use crate::assistant::{
    respond, Intent, IntentResponder, IntentRule, ResponseCatalog, QUICK_PROMPTS,
};
use crate::error::AppError;

#[cfg(test)]
mod responder_tests {
    use super::*;

    fn reply(intent: Intent) -> String {
        ResponseCatalog::default().reply(intent).to_string()
    }

    #[test]
    fn test_greeting_wins_over_every_topic() {
        let greetings = ["hello", "Hi", "HEY"];
        let topics = [
            "price", "irrigation", "sensor", "subsidy", "contact", "advantage", "location",
            "cotton",
        ];

        for greeting in greetings {
            for topic in topics {
                let text = format!("{} {}", topic, greeting);
                assert_eq!(
                    respond(&text),
                    reply(Intent::Greeting),
                    "Expected greeting reply for '{}'",
                    text
                );
            }
        }
    }

    #[test]
    fn test_pricing_beats_sensors() {
        assert_eq!(respond("What is the PRICE for sensors?"), reply(Intent::Pricing));
    }

    #[test]
    fn test_each_category_reachable() {
        let cases = [
            ("Tell me the cost per acre", Intent::Pricing),
            ("Do you offer a yearly plan?", Intent::Pricing),
            ("Does drip irrigation work on sand?", Intent::Irrigation),
            ("WATER usage is too large", Intent::Irrigation),
            ("Installation takes how long?", Intent::Sensors),
            ("Is setup easy?", Intent::Sensors),
            ("PM-KISAN scheme details", Intent::Schemes),
            ("Any government subsidy?", Intent::Schemes),
            ("I need help", Intent::Support),
            ("Contact number please", Intent::Support),
            ("What are the benefits?", Intent::Benefits),
            ("Why should I buy", Intent::Benefits),
            ("Do you work in my state?", Intent::States),
            ("Do you cover my area", Intent::States),
            ("Good for rice?", Intent::Crops),
            ("List the crops you grow", Intent::Crops),
        ];

        let responder = IntentResponder::default();
        for (text, expected) in cases {
            assert_eq!(
                responder.classify(text).intent,
                expected,
                "Expected {:?} for '{}'",
                expected,
                text
            );
            assert_eq!(responder.respond(text), reply(expected));
        }
    }

    #[test]
    fn test_fallback_for_unmatched_input() {
        let fallback = reply(Intent::Fallback);

        for text in ["", "   ", "xyz123", "Tell me a joke", "???", "नमस्ते जी"] {
            assert_eq!(respond(text), fallback, "Expected fallback for '{}'", text);
        }
    }

    #[test]
    fn test_respond_always_returns_catalog_string() {
        let catalog = ResponseCatalog::default();
        let replies: Vec<&str> = catalog.iter().map(|(_, r)| r).collect();

        for text in ["hello", "cost", "random words", "SENSOR", "wheat", "", "💧"] {
            assert!(replies.contains(&respond(text)));
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Which government scheme fits wheat farmers?";
        assert_eq!(respond(text), respond(text));
    }

    #[test]
    fn test_quick_prompts_have_specific_replies() {
        let responder = IntentResponder::default();
        let expected = [
            Intent::Irrigation,
            Intent::Pricing,
            Intent::Sensors,
            Intent::Schemes,
            Intent::Support,
        ];

        assert_eq!(QUICK_PROMPTS.len(), expected.len());
        for (prompt, intent) in QUICK_PROMPTS.iter().zip(expected) {
            assert_eq!(responder.classify(prompt).intent, intent, "prompt '{}'", prompt);
        }
    }
}

#[cfg(test)]
mod custom_catalog_tests {
    use super::*;

    #[test]
    fn test_extend_rules_without_touching_matching() {
        let mut rules = IntentResponder::default().rules().to_vec();
        rules.push(IntentRule::new(Intent::Crops, ["millet", "Bajra"]));

        let responder = IntentResponder::new(rules, ResponseCatalog::default()).unwrap();
        let result = responder.classify("Is bajra good?");

        assert_eq!(result.intent, Intent::Crops);
        assert_eq!(result.matched_keyword.as_deref(), Some("bajra"));
    }

    #[test]
    fn test_rule_order_is_priority() {
        let rules = vec![
            IntentRule::new(Intent::Sensors, ["sensor"]),
            IntentRule::new(Intent::Pricing, ["price"]),
        ];
        let responder = IntentResponder::new(rules, ResponseCatalog::default()).unwrap();

        assert_eq!(
            responder.classify("What is the PRICE for sensors?").intent,
            Intent::Sensors
        );
    }

    #[test]
    fn test_custom_replies() {
        let catalog = ResponseCatalog::new([
            (Intent::Greeting, "Sat Sri Akal!"),
            (Intent::Fallback, "Please ask about farming."),
        ])
        .unwrap();
        let rules = vec![IntentRule::new(Intent::Greeting, ["sat sri akal"])];
        let responder = IntentResponder::new(rules, catalog).unwrap();

        assert_eq!(responder.respond("SAT SRI AKAL ji"), "Sat Sri Akal!");
        assert_eq!(responder.respond("hello"), "Please ask about farming.");
    }

    #[test]
    fn test_rule_without_reply_rejected() {
        let catalog = ResponseCatalog::new([(Intent::Fallback, "Sorry?")]).unwrap();
        let rules = vec![IntentRule::new(Intent::Pricing, ["price"])];

        let result = IntentResponder::new(rules, catalog);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_empty_rule_set_always_falls_back() {
        let responder = IntentResponder::new(vec![], ResponseCatalog::default()).unwrap();
        assert_eq!(responder.classify("hello").intent, Intent::Fallback);
    }
}
