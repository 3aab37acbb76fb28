//! Compiled-in default values for configuration resolution.
//!
//! Every value here is the fallback used when the corresponding environment
//! variable is unset or empty; they mirror the platform's stock container
//! configuration. The signing keys are development placeholders — a
//! production profile refuses to boot while any of them is still in use.

/// Database name when `MYSQL_DATABASE` is unset.
pub const DB_NAME: &str = "wordpress";

/// Database user when `MYSQL_USER` is unset.
pub const DB_USER: &str = "wpuser";

/// Database password when `MYSQL_PASSWORD` is unset. Development only.
pub const DB_PASSWORD: &str = "wpP@ssword123";

/// Database hostname when `MYSQL_DB_HOST` is unset — the conventional
/// compose service name.
pub const DB_HOST: &str = "db";

/// Table charset. Not environment-overridable.
pub const DB_CHARSET: &str = "utf8mb4";

/// Collation. Empty string selects the driver default.
pub const DB_COLLATE: &str = "";

/// Table-name prefix. Changing this on an installed site orphans its tables.
pub const TABLE_PREFIX: &str = "wp_";

/// Debug mode flag.
pub const DEBUG: bool = true;

/// Write debug output to the platform's debug log.
pub const DEBUG_LOG: bool = true;

/// Render notices into responses. Production validation rejects this.
pub const DEBUG_DISPLAY: bool = true;

/// Install root inside the stock container image, used when `ABSPATH` is not
/// defined by the outer context.
pub const INSTALL_ROOT: &str = "/var/www/html";

/// Placeholder signing keys and salts, keyed by their canonical environment
/// variable names, in platform order (four keys, then the matching salts).
/// [`crate::config::SigningKeys::named`] yields values in the same order.
pub const SIGNING_KEY_PLACEHOLDERS: [(&str, &str); 8] = [
    (
        "AUTH_KEY",
        "~Z+^{AI__MchXMeFviD<Nj?_KNyzns@_4*wWIi,&B:y#g>:Zxxm9 $._t~#V`2aR",
    ),
    (
        "SECURE_AUTH_KEY",
        "({^L@6!Gn5pu*fDou]A 8*%Yzaw^<#Y<D0sKv20gC8ZPkGalW Du=7aE_QFo-<;_",
    ),
    (
        "LOGGED_IN_KEY",
        "ATh@^,_[>EYI[]E!+Jh2Eiy@/ZvTh6EGd@m~8vd>C?VGPjz]@QK;1 l:wa9?okM`",
    ),
    (
        "NONCE_KEY",
        "SxZy=lsy=`U[0Skmw9XHW*e#J<wPN$ss(Xs@dl3oS1nD2Pa>2ba))1Q4uFNy6G$3",
    ),
    (
        "AUTH_SALT",
        "=v/W:e[^J*vqG-V^9kdNnErTb7h.r1SapMWeqk7UG~}7FDOwv/f<B.?eNPh;%rNd",
    ),
    (
        "SECURE_AUTH_SALT",
        "D~bvtb1i`2+e#1:H+1Xlq4F!jM,a)CSez:{FZZKYnR$[_G`DI>)57Y~&~I#BT[M7",
    ),
    (
        "LOGGED_IN_SALT",
        "[l8Gzz`#<eZCz8anW=Z(/opNMw&6g>+pHgMy! _:r}=lX0D8CAl1zc-hcdH,V9#!",
    ),
    (
        "NONCE_SALT",
        "?^TS$VS8*k!$[caKV}<I rm[}y})_dg0wKS1Y:w~S-q%w]Xd-t}o/S(8ED=J3<jw",
    ),
];
