/// Generates the standard operator boilerplate for single-field newtypes.
///
/// `binary` covers `Add`-style traits (`Self op Self -> Self`), `inplace`
/// covers the `*Assign` traits, and `unary` covers `Neg` and friends.
#[macro_export]
macro_rules! op {
    (binary $t:ident, $trait:ident, $method:ident) => {
        impl $trait for $t {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }
    };
    (inplace $t:ident, $trait:ident, $method:ident) => {
        impl $trait for $t {
            fn $method(&mut self, rhs: Self) {
                $trait::$method(&mut self.0, rhs.0)
            }
        }
    };
    (unary $t:ident, $trait:ident, $method:ident) => {
        impl $trait for $t {
            type Output = Self;

            fn $method(self) -> Self::Output {
                Self($trait::$method(self.0))
            }
        }
    };
}
