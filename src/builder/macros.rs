//! Macros for ergonomic configuration construction.

/// Write a [`Config`](crate::core::Config) as a nested literal.
///
/// State and event names are identifiers and keep their declared order. The
/// result is not validated, exactly like a hand-written `Config`.
///
/// # Example
///
/// ```
/// use fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle: { go => running },
///         running: { stop => idle, pause => paused },
///         paused: {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.target("running", "pause"), Some("paused"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident : { $( $event:ident => $target:ident ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::core::Config::new(
            stringify!($initial),
            [
                $(
                    (
                        stringify!($state),
                        $crate::core::StateDef::new()
                            $( .on(stringify!($event), stringify!($target)) )*,
                    )
                ),*
            ],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::machine::Fsm;

    #[test]
    fn fsm_config_macro_builds_config() {
        let config = fsm_config! {
            initial: idle,
            states: {
                idle: { go => running },
                running: { stop => idle },
            }
        };

        assert_eq!(config.initial, "idle");
        assert_eq!(
            config.state_names().collect::<Vec<_>>(),
            vec!["idle", "running"]
        );
        assert!(config.validate().is_success());
    }

    #[test]
    fn fsm_config_supports_empty_states() {
        let config = fsm_config! {
            initial: done,
            states: {
                done: {},
            }
        };

        assert!(config.state("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn fsm_config_does_not_validate() {
        let config = fsm_config! {
            initial: start,
            states: {
                start: { jump => nowhere },
            }
        };

        let mut fsm = Fsm::new(config);
        fsm.trigger("jump").unwrap();
        assert_eq!(fsm.state(), "nowhere");
    }
}
