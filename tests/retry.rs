use paratus::tools::retry_interrupted;
use paratus::{Error, FdSet, WaitRequest, wait};

use std::os::fd::RawFd;

fn pipe() -> (RawFd, RawFd) {
    let mut fds = [0; 2];
    let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
    assert_eq!(rc, 0, "pipe(2) failed");

    (fds[0], fds[1])
}

#[test]
fn test_success_passes_through() {
    let result: Result<i32, Error> = retry_interrupted(|| Ok(42));

    assert!(matches!(result, Ok(42)));
}

#[test]
fn test_retries_until_the_interruptions_stop() {
    let mut attempts = 0;
    let result = retry_interrupted(|| {
        attempts += 1;
        if attempts < 3 {
            Err(Error::Interrupted)
        } else {
            Ok(attempts)
        }
    });

    assert!(matches!(result, Ok(3)), "two interruptions then success");
}

#[test]
fn test_other_errors_pass_through_unretried() {
    let mut attempts = 0;
    let result: Result<(), Error> = retry_interrupted(|| {
        attempts += 1;
        Err(Error::InvalidArgument {
            reason: "nfds is negative",
        })
    });

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert_eq!(attempts, 1, "non-interrupt failures should not be retried");
}

#[test]
fn test_wraps_a_readiness_wait() {
    let (r, w) = pipe();
    let rc = unsafe { libc::write(w, [0u8; 1].as_ptr() as *const _, 1) };
    assert_eq!(rc, 1, "write(2) failed");

    let mut template = FdSet::new();
    template.insert(r).unwrap();

    // Each attempt re-arms its interest set from the template.
    let ready = retry_interrupted(|| {
        let mut request = WaitRequest::new(r + 1).readable(template);
        wait(&mut request)
    })
    .unwrap();

    assert_eq!(ready, 1);

    unsafe {
        libc::close(r);
        libc::close(w);
    }
}
