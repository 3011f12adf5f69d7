use super::*;

use std::time::Duration;

use tokio::{sync::oneshot, time};

mod abort_on_drop_handle {
    use super::*;

    #[tokio::test]
    async fn resolves_like_a_join_handle() {
        let handle = AbortOnDropHandle::from(tokio::spawn(async { 7 }));

        let value = handle.await.expect("task must join cleanly");
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn aborts_the_task_on_drop() {
        let (tx, rx) = oneshot::channel::<()>();

        let handle = AbortOnDropHandle::from(tokio::spawn(async move {
            // Keep the sender alive; it is only dropped when the task dies.
            let _tx = tx;
            time::sleep(Duration::from_secs(3600)).await;
        }));

        drop(handle);

        rx.await
            .expect_err("sender must be dropped when the task is aborted");
    }

    #[tokio::test]
    async fn join_after_abort_reports_cancellation() {
        let handle = AbortOnDropHandle::from(tokio::spawn(async {
            time::sleep(Duration::from_secs(3600)).await;
        }));

        handle.abort();

        let join_err = handle.await.expect_err("task must be cancelled");
        assert!(join_err.is_cancelled());
    }
}
