use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::app::services::prompt_rendering::parameter_inference_prompt;
use crate::domain::normalization::normalize;
use crate::domain::{
    AppError, Conversation, ExplicitParameters, ParameterKey, ParameterValue, ResolvedParameters,
};
use crate::ports::Oracle;

/// Resolves every parameter from user input or, when blank, from the model.
pub struct ParameterCollector<'a, O: Oracle> {
    oracle: &'a O,
}

impl<'a, O: Oracle> ParameterCollector<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Resolve all parameters in canonical key order.
    ///
    /// Explicit values are taken verbatim. Each blank key costs one oracle call, made on
    /// a conversation shared across the blank keys of this session.
    pub fn resolve(
        &self,
        idea: &str,
        explicit: &ExplicitParameters,
    ) -> Result<ResolvedParameters, AppError> {
        let mut conversation = Conversation::new();
        let mut values = BTreeMap::new();

        for key in ParameterKey::ALL {
            let value = match explicit.get(key) {
                Some(value) => {
                    debug!(parameter = key.as_str(), "using explicit value");
                    ParameterValue::text(value)
                }
                None => self.infer(&mut conversation, idea, key)?,
            };
            values.insert(key, value);
        }

        info!(
            explicit = explicit.provided_count(),
            inferred = conversation.exchanges(),
            "parameters resolved"
        );
        ResolvedParameters::from_values(values)
    }

    fn infer(
        &self,
        conversation: &mut Conversation,
        idea: &str,
        key: ParameterKey,
    ) -> Result<ParameterValue, AppError> {
        let prompt = parameter_inference_prompt(idea, key)?;
        debug!(parameter = key.as_str(), history = conversation.len(), "inferring value");

        let response = self.oracle.send(conversation, &prompt)?;
        let value = normalize(key, &response);
        debug!(parameter = key.as_str(), %value, "normalized oracle answer");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeOracle;
    use proptest::prelude::*;

    #[test]
    fn all_explicit_values_need_no_oracle_calls() {
        let oracle = FakeOracle::new("unused");
        let explicit = ExplicitParameters::new()
            .with(ParameterKey::NumberOfVideos, "2")
            .with(ParameterKey::DurationMinutes, "10")
            .with(ParameterKey::GraphicType, "watercolor")
            .with(ParameterKey::VideoStyle, "stop motion")
            .with(ParameterKey::Audience, "teens");

        let resolved =
            ParameterCollector::new(&oracle).resolve("a cooking show", &explicit).unwrap();

        assert_eq!(oracle.call_count(), 0);
        assert_eq!(resolved.get(ParameterKey::NumberOfVideos), &ParameterValue::text("2"));
        assert_eq!(resolved.get(ParameterKey::GraphicType), &ParameterValue::text("watercolor"));
        assert_eq!(resolved.get(ParameterKey::Audience), &ParameterValue::text("teens"));
    }

    #[test]
    fn blank_keys_are_inferred_in_key_order() {
        let oracle = FakeOracle::with_replies([
            "I think 3 videos would work well",
            "about 5 minutes",
            "I'd go with Animated style",
            "Motion pictures feel right",
            "General audiences",
        ]);

        let resolved = ParameterCollector::new(&oracle)
            .resolve("a cooking show", &ExplicitParameters::new())
            .unwrap();

        let sent = oracle.sent_messages();
        assert_eq!(sent.len(), 5);
        for (message, key) in sent.iter().zip(ParameterKey::ALL) {
            assert!(message.message.contains(&format!("'{}'", key.as_str())));
            assert!(message.message.contains("a cooking show"));
        }

        assert_eq!(resolved.get(ParameterKey::NumberOfVideos), &ParameterValue::Integer(3));
        assert_eq!(resolved.get(ParameterKey::DurationMinutes), &ParameterValue::Integer(5));
        assert_eq!(resolved.get(ParameterKey::GraphicType), &ParameterValue::text("Animated"));
        assert_eq!(
            resolved.get(ParameterKey::VideoStyle),
            &ParameterValue::text("Motion pictures")
        );
        assert_eq!(resolved.get(ParameterKey::Audience), &ParameterValue::text("General"));
    }

    #[test]
    fn inference_shares_one_conversation() {
        let oracle = FakeOracle::new("2");
        ParameterCollector::new(&oracle).resolve("idea", &ExplicitParameters::new()).unwrap();

        let history: Vec<usize> = oracle.sent_messages().iter().map(|m| m.history_len).collect();
        assert_eq!(history, [0, 2, 4, 6, 8]);
    }

    #[test]
    fn only_blank_keys_reach_the_oracle() {
        let oracle = FakeOracle::with_replies(["a few", "7", "not sure", "steady pictures"]);
        let explicit = ExplicitParameters::new().with(ParameterKey::Audience, "teens");

        let resolved =
            ParameterCollector::new(&oracle).resolve("a cooking show", &explicit).unwrap();

        assert_eq!(oracle.call_count(), 4);
        assert!(oracle.sent_messages().iter().all(|m| !m.message.contains("'audience'")));
        assert_eq!(resolved.get(ParameterKey::NumberOfVideos), &ParameterValue::text("a few"));
        assert_eq!(resolved.get(ParameterKey::DurationMinutes), &ParameterValue::Integer(7));
        assert_eq!(resolved.get(ParameterKey::GraphicType), &ParameterValue::text("not sure"));
        assert_eq!(
            resolved.get(ParameterKey::VideoStyle),
            &ParameterValue::text("Steady pictures")
        );
        assert_eq!(resolved.get(ParameterKey::Audience), &ParameterValue::text("teens"));
    }

    #[test]
    fn whitespace_only_input_defers_to_oracle() {
        let oracle = FakeOracle::new("Realistic");
        let explicit = ExplicitParameters::new()
            .with(ParameterKey::NumberOfVideos, "1")
            .with(ParameterKey::DurationMinutes, "1")
            .with(ParameterKey::GraphicType, "   ")
            .with(ParameterKey::VideoStyle, "x")
            .with(ParameterKey::Audience, "y");

        let resolved = ParameterCollector::new(&oracle).resolve("idea", &explicit).unwrap();

        assert_eq!(oracle.call_count(), 1);
        assert_eq!(resolved.get(ParameterKey::GraphicType), &ParameterValue::text("Realistic"));
    }

    #[test]
    fn oracle_failure_aborts_resolution() {
        let oracle = FakeOracle::with_replies(["3"]);
        oracle.push_failure("quota exceeded");

        let err = ParameterCollector::new(&oracle)
            .resolve("idea", &ExplicitParameters::new())
            .unwrap_err();

        assert!(matches!(err, AppError::OracleRequest(reason) if reason == "quota exceeded"));
        assert_eq!(oracle.call_count(), 2);
    }

    proptest! {
        #[test]
        fn explicit_values_are_returned_unchanged(
            values in proptest::collection::vec("[ -~]*[!-~][ -~]*", 5)
        ) {
            let oracle = FakeOracle::new("unused");
            let explicit = ParameterKey::ALL
                .iter()
                .zip(&values)
                .fold(ExplicitParameters::new(), |acc, (key, value)| acc.with(*key, value.clone()));

            let resolved = ParameterCollector::new(&oracle).resolve("idea", &explicit).unwrap();

            prop_assert_eq!(oracle.call_count(), 0);
            for (key, value) in ParameterKey::ALL.iter().zip(&values) {
                prop_assert_eq!(resolved.get(*key), &ParameterValue::text(value.clone()));
            }
        }
    }
}
