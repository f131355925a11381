#[cfg(test)]
mod eval;
