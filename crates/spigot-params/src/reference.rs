//! Trusted decimal expansion of π
//!
//! Reference: <https://oeis.org/A000796>

/// First 800 decimal digits of π, starting with the leading `3`
pub const PI_DIGITS: &str = concat!(
    "31415926535897932384626433832795028841971693993751",
    "05820974944592307816406286208998628034825342117067",
    "98214808651328230664709384460955058223172535940812",
    "84811174502841027019385211055596446229489549303819",
    "64428810975665933446128475648233786783165271201909",
    "14564856692346034861045432664821339360726024914127",
    "37245870066063155881748815209209628292540917153643",
    "67892590360011330530548820466521384146951941511609",
    "43305727036575959195309218611738193261179310511854",
    "80744623799627495673518857527248912279381830119491",
    "29833673362440656643086021394946395224737190702179",
    "86094370277053921717629317675238467481846766940513",
    "20005681271452635608277857713427577896091736371787",
    "21468440901224953430146549585371050792279689258923",
    "54201995611212902196086403441815981362977477130996",
    "05187072113499999983729780499510597317328160963185",
);

/// Number of digits in [`PI_DIGITS`]
pub const PI_DIGITS_LEN: usize = PI_DIGITS.len();
