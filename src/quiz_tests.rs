#[cfg(test)]
mod quiz_scenario_tests {
    use crate::models::{Deck, Operator, Phase, Question, QuizEvent, QuizState};
    use crate::quiz::feedback_for;
    use rand::Rng;

    use Operator::{Equal, GreaterOrEqual, LessOrEqual};

    /// Three questions answered `==`, `>=`, `<=`.
    fn lesson_deck() -> Deck {
        let questions = [Equal, GreaterOrEqual, LessOrEqual]
            .iter()
            .enumerate()
            .map(|(i, op)| Question {
                left_label: format!("left {}", i),
                right_label: format!("right {}", i),
                correct_operator: *op,
                correct_message: format!("correct {}", i),
                incorrect_message: format!("incorrect {}", i),
            })
            .collect();
        Deck::new("lesson", questions).unwrap()
    }

    fn run(deck: &Deck, events: &[QuizEvent]) -> QuizState {
        events
            .iter()
            .fold(QuizState::default(), |state, event| state.transition(deck, *event))
    }

    #[test]
    fn test_retry_then_all_correct_scores_three() {
        let deck = lesson_deck();
        let state = run(
            &deck,
            &[
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::OperatorChosen(GreaterOrEqual),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(LessOrEqual),
                QuizEvent::Advance,
            ],
        );
        assert_eq!(state.phase(), Phase::Finished { score: 3 });
    }

    #[test]
    fn test_never_correct_scores_zero() {
        let deck = lesson_deck();
        let state = run(
            &deck,
            &[
                QuizEvent::OperatorChosen(LessOrEqual),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(GreaterOrEqual),
                QuizEvent::Advance,
            ],
        );
        assert_eq!(state.phase(), Phase::Finished { score: 0 });
    }

    #[test]
    fn test_only_last_selection_counts() {
        let deck = lesson_deck();
        // Correct first, then changed to a wrong answer before advancing.
        let state = run(
            &deck,
            &[
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::OperatorChosen(LessOrEqual),
                QuizEvent::Advance,
            ],
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn test_advance_without_attempt_is_noop() {
        let deck = lesson_deck();
        let state = run(&deck, &[QuizEvent::Advance, QuizEvent::Advance]);
        assert_eq!(state, QuizState::default());

        let state = run(
            &deck,
            &[
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
                QuizEvent::Advance,
            ],
        );
        assert_eq!(state.current_index, 1);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_finished_ignores_further_events() {
        let deck = lesson_deck();
        let finished = run(
            &deck,
            &[
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
            ],
        );
        assert_eq!(finished.phase(), Phase::Finished { score: 1 });
        assert_eq!(finished.current_index, deck.len() - 1);

        let after = finished
            .transition(&deck, QuizEvent::OperatorChosen(LessOrEqual))
            .transition(&deck, QuizEvent::Advance);
        assert_eq!(after, finished);
    }

    #[test]
    fn test_restart_from_any_point() {
        let deck = lesson_deck();
        let prefixes: [&[QuizEvent]; 3] = [
            &[],
            &[QuizEvent::OperatorChosen(GreaterOrEqual)],
            &[
                QuizEvent::OperatorChosen(Equal),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(GreaterOrEqual),
                QuizEvent::Advance,
                QuizEvent::OperatorChosen(LessOrEqual),
                QuizEvent::Advance,
            ],
        ];
        for prefix in prefixes {
            let state = run(&deck, prefix).transition(&deck, QuizEvent::Restart);
            assert_eq!(state, QuizState::default());
            assert_eq!(state.selected_operator, None);
        }
    }

    #[test]
    fn test_feedback_matches_choice_on_every_question() {
        let deck = lesson_deck();
        let mut state = QuizState::default();
        for (i, question) in deck.questions().iter().enumerate() {
            assert!(feedback_for(&state, question).is_none());
            for op in Operator::ALL {
                state = state.transition(&deck, QuizEvent::OperatorChosen(op));
                let fb = feedback_for(&state, question).unwrap();
                if op == question.correct_operator {
                    assert_eq!(fb.message, format!("correct {}", i));
                } else {
                    assert_eq!(fb.message, format!("incorrect {}", i));
                }
            }
            state = state.transition(&deck, QuizEvent::Advance);
        }
        assert!(state.finished);
    }

    #[test]
    fn test_random_sessions_keep_invariants() {
        let deck = lesson_deck();
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let mut state = QuizState::default();
            let mut expected_score = 0;
            let mut last_choice = None;

            for _ in 0..30 {
                let event = match rng.gen_range(0..10) {
                    0..=5 => QuizEvent::OperatorChosen(Operator::ALL[rng.gen_range(0..3)]),
                    6..=8 => QuizEvent::Advance,
                    _ => QuizEvent::Restart,
                };

                match event {
                    QuizEvent::OperatorChosen(op) if !state.finished => last_choice = Some(op),
                    QuizEvent::Advance if !state.finished => {
                        if let Some(op) = last_choice.take()
                            && op == deck.question(state.current_index).correct_operator
                        {
                            expected_score += 1;
                        }
                    }
                    QuizEvent::Restart => {
                        expected_score = 0;
                        last_choice = None;
                    }
                    _ => {}
                }

                state = state.transition(&deck, event);

                assert!(state.score <= deck.len());
                assert!(state.current_index < deck.len());
                assert_eq!(state.score, expected_score);
                if !state.attempted() {
                    assert_eq!(state.selected_operator, None);
                }
                if state.finished {
                    assert_eq!(state.current_index, deck.len() - 1);
                }
            }
        }
    }
}
