#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::time::Duration;

    use crate::core::content::{FAQ, TAB_GROUP_IDS, tab_group};
    use crate::core::waitlist::{BUSY_LABEL, FALLBACK_SUCCESS_MS};
    use crate::core::{Accordion, Completion, SubmissionPhase, WaitlistSubmission, race_completion};

    /// Mirrors the form handler: race the two signals, then apply the winner.
    /// Returns how many times the form content was replaced.
    async fn settle<F>(submission: &mut WaitlistSubmission, frame_load: F) -> usize
    where
        F: Future<Output = ()>,
    {
        let fallback = tokio::time::sleep(Duration::from_millis(FALLBACK_SUCCESS_MS as u64));
        let by = race_completion(frame_load, fallback).await;
        usize::from(submission.complete(by))
    }

    // ========================================================================
    // Waitlist submission scenarios
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_submission_without_frame_load_succeeds_after_fallback() {
        let started = tokio::time::Instant::now();
        let mut submission = WaitlistSubmission::new();

        submission.begin("test@example.com").unwrap();
        assert_eq!(submission.submit_label(), BUSY_LABEL);
        assert!(submission.submit_disabled());

        let replaced = settle(&mut submission, futures::future::pending()).await;

        assert_eq!(replaced, 1);
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(
            submission.phase(),
            SubmissionPhase::Succeeded(Completion::FallbackElapsed)
        );

        // The frame finally loads at 1600ms
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!submission.complete(Completion::FrameLoaded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_with_frame_load_succeeds_at_load_time() {
        let started = tokio::time::Instant::now();
        let mut submission = WaitlistSubmission::new();
        submission.begin("test@example.com").unwrap();

        let (loaded_tx, loaded_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            let _ = loaded_tx.send(());
        });
        let frame_load = async move {
            let _ = loaded_rx.await;
        };

        let replaced = settle(&mut submission, frame_load).await;
        let settled_at = started.elapsed();

        assert_eq!(replaced, 1);
        assert!(settled_at >= Duration::from_millis(200));
        assert!(settled_at < Duration::from_millis(1500));
        assert_eq!(
            submission.phase(),
            SubmissionPhase::Succeeded(Completion::FrameLoaded)
        );

        // A late fallback at 1500ms changes nothing
        tokio::time::sleep(Duration::from_millis(1300)).await;
        assert!(!submission.complete(Completion::FallbackElapsed));
        assert_eq!(
            submission.phase(),
            SubmissionPhase::Succeeded(Completion::FrameLoaded)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_forms_settle_independently() {
        let mut hero = WaitlistSubmission::new();
        let footer = WaitlistSubmission::new();

        hero.begin("a@example.com").unwrap();
        settle(&mut hero, futures::future::pending()).await;

        assert!(hero.is_succeeded());
        assert!(footer.is_idle());
    }

    // ========================================================================
    // Page-wide controllers
    // ========================================================================

    #[test]
    fn test_faq_single_open_across_two_lists() {
        let mut accordion = Accordion::new();
        let first_list: Vec<_> = (0..3).map(|_| accordion.register()).collect();
        let second_list: Vec<_> = (0..2).map(|_| accordion.register()).collect();

        accordion.toggle(first_list[1]);
        accordion.toggle(second_list[0]);
        assert!(!accordion.is_expanded(first_list[1]));
        assert!(accordion.is_expanded(second_list[0]));

        let clicks = [
            first_list[0],
            first_list[0],
            second_list[1],
            first_list[2],
            second_list[1],
            second_list[1],
        ];
        for item in clicks {
            accordion.toggle(item);
            let open = first_list
                .iter()
                .chain(&second_list)
                .filter(|id| accordion.is_expanded(**id))
                .count();
            assert!(open <= 1);
            assert_eq!(open, accordion.expanded_count());
        }
    }

    #[test]
    fn test_faq_content_registers_every_entry() {
        let mut accordion = Accordion::new();
        let ids: Vec<_> = FAQ.iter().map(|_| accordion.register()).collect();

        accordion.toggle(ids[FAQ.len() - 1]);
        assert_eq!(accordion.len(), FAQ.len());
        assert_eq!(accordion.expanded(), Some(ids[FAQ.len() - 1]));
    }

    #[test]
    fn test_every_tab_button_activates_its_pane() {
        for id in TAB_GROUP_IDS {
            let content = tab_group(id).unwrap();
            let mut state = content.state().unwrap();

            for (index, pane) in content.panes.iter().enumerate() {
                assert_eq!(state.select(index), Some(pane.id));
                for (other, other_pane) in content.panes.iter().enumerate() {
                    assert_eq!(state.is_button_active(other), other == index);
                    assert_eq!(state.is_pane_active(other_pane.id), other == index);
                }
            }
        }
    }

    #[test]
    fn test_tab_groups_do_not_share_state() {
        let mut ai = tab_group("ai-tabs").unwrap().state().unwrap();
        let suite = tab_group("suite-tabs").unwrap().state().unwrap();

        ai.select(3);
        assert_eq!(ai.active_pane(), Some("rule-automation"));
        assert_eq!(suite.active_pane(), Some("unified-inbox"));
    }
}
