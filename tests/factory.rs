//! Factory protocol behavior across the result family.

use std::time::Duration;

use data_result::{BooleanDataResult, DataResult, SingleDataResult, VoidResult};

#[test]
fn computation_runs_exactly_once() {
    let mut calls = 0;
    let result = VoidResult::create(|| {
        calls += 1;
        Ok(())
    });
    assert!(result.is_success());
    assert_eq!(calls, 1);
}

#[test]
fn fault_barrier_holds_for_chained_errors() {
    fn load() -> anyhow::Result<String> {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        Err(anyhow::Error::new(io).context("loading profile"))
    }

    let result = SingleDataResult::create(load);
    assert!(result.is_failure());

    let fault = result.fault().expect("fault captured");
    assert_eq!(fault.description(), "loading profile");
    assert_eq!(fault.chain(), ["no such file"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_invocations_own_independent_results() {
    let mut handles = Vec::new();
    for n in 0..16u32 {
        handles.push(tokio::spawn(async move {
            SingleDataResult::create_async(|| async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                if n % 2 == 0 {
                    Ok(n)
                } else {
                    Err(anyhow::anyhow!("task {n} failed"))
                }
            })
            .await
        }));
    }

    for (n, handle) in (0..16u32).zip(handles) {
        let result = handle.await.expect("task not cancelled");
        if n % 2 == 0 {
            assert!(result.is_success());
            assert_eq!(result.data(), Some(&n));
        } else {
            assert!(result.is_failure());
            assert_eq!(
                result.fault().map(data_result::Fault::description),
                Some(format!("task {n} failed").as_str())
            );
        }
    }
}

#[tokio::test]
async fn suspending_factory_awaits_the_supplied_future() {
    let start = std::time::Instant::now();
    let result = VoidResult::create_async(|| async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(())
    })
    .await;

    assert!(result.is_success());
    assert!(start.elapsed() >= Duration::from_millis(10));
}

#[tokio::test]
async fn boolean_guard_works_across_await_points() {
    let enabled = BooleanDataResult::create_async(|| async { Ok(true) }).await;
    let denied =
        BooleanDataResult::create_async(|| async { Err(anyhow::anyhow!("flag store down")) })
            .await;

    assert!(bool::from(&enabled));
    assert!(!bool::from(&denied));
    assert!(denied.fault().is_some());
}

#[test]
fn response_time_is_stamped_once() {
    let mut result = VoidResult::create(|| Ok(()));
    let stamped = result.response_time();

    result.set_message("annotated later");
    result.set_error_code(42);

    assert_eq!(result.response_time(), stamped);
}
