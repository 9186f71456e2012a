/// Arithmetic of one spigot pass
pub mod arith {
    /// Decimal base extracted per outer pass (four digits)
    pub const BASE: u64 = 10_000;

    /// Decimal digits carried by one emitted group
    pub const DIGITS_PER_GROUP: usize = 4;

    /// Series terms consumed per emitted group
    ///
    /// Each term of the series contributes roughly log10(2) digits, so 14
    /// terms cover the 4 digits of one group at `BASE`.
    pub const TERMS_PER_GROUP: usize = 14;

    /// Initial value of every remainder table entry
    ///
    /// The series is scaled so the first group reads `3141`, i.e. π * 10^3,
    /// which puts the seed at 2 * BASE / 10.
    pub const SEED: u32 = (2 * BASE / 10) as u32;
}

/// Values the reference program was compiled with
pub mod defaults {
    /// Digit count printed by the reference program
    pub const DIGITS: usize = 800;
}
