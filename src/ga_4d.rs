//! Four-dimensional Euclidean space. The spatial bivectors `xy`, `yz`, `zx` come first, followed
//! by the temporal ones `wx`, `wy`, `wz`, each oriented from `w`.

use crate::KVector;

macros::algebra! {
    bases { x ^ 2 == 1, y ^ 2 == 1, z ^ 2 == 1, w ^ 2 == 1 },
    blades { xy, yz, zx, wx, wy, wz, xyz, xyw, yzw, zxw, xyzw }
}

/// Unit pseudoscalar. Unlike the lower dimensions it squares to +1.
pub const J: KVector = PSEUDOSCALAR;
