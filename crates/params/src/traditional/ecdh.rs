//! Constants for Elliptic Curve Diffie-Hellman

/// Size of a P-256 field element (and of each point coordinate) in bytes
pub const ECDH_P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a P-256 private scalar in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of the P-256 shared secret (x-coordinate of the shared point) in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Named short-Weierstrass domain parameters, y² = x³ + a·x + b (mod p)
///
/// All values are big-endian hexadecimal without a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveProfile {
    /// Canonical profile name
    pub name: &'static str,
    /// Other names accepted for this profile
    pub aliases: &'static [&'static str],
    /// Prime modulus p
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Base point x-coordinate
    pub g_x: &'static str,
    /// Base point y-coordinate
    pub g_y: &'static str,
    /// Order n of the base point
    pub n: &'static str,
}

/// NIST P-256 (SEC 2 secp256r1, ANSI X9.62 prime256v1)
pub const PRIME256V1: CurveProfile = CurveProfile {
    name: "prime256v1",
    aliases: &["P-256", "secp256r1"],
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    g_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    g_y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
};

/// Every supported profile
pub const PROFILES: &[CurveProfile] = &[PRIME256V1];

/// Find a profile by canonical name or alias (ASCII case-insensitive)
pub fn lookup_profile(name: &str) -> Option<&'static CurveProfile> {
    PROFILES.iter().find(|profile| {
        profile.name.eq_ignore_ascii_case(name)
            || profile
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    })
}
