#[cfg(test)]
mod inventory;
