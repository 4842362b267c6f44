/// Time a statement and report the elapsed time through `log::debug!`.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    ::log::debug!("{} profile: {}us", $title, t0.elapsed().as_micros());
  }}
);

#[cfg(test)]
mod tests {
  #[test] fn profile_runs_the_block_once() {
    let mut calls = 0;
    crate::profile!("count", {
      calls += 1
    });
    assert_eq!(calls, 1);
  }
}
