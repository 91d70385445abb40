//! `Member` implementations for every position of every union arity.

use super::{At1, At2, At3, At4, Member, OneOf2, OneOf3, OneOf4};
use crate::monads::Option;

// =============================================================================
// OneOf2
// =============================================================================

impl<T1, T2> Member<T1, At1> for OneOf2<T1, T2> {
    type Remainder = T2;

    #[inline]
    fn inject(value: T1) -> Self {
        Self::First(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T1, T2> {
        match self {
            Self::First(value) => Ok(value),
            Self::Second(other) => Err(other),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T1> {
        match self {
            Self::First(value) => Option::Some(value),
            Self::Second(_) => Option::None,
        }
    }
}

impl<T1, T2> Member<T2, At2> for OneOf2<T1, T2> {
    type Remainder = T1;

    #[inline]
    fn inject(value: T2) -> Self {
        Self::Second(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T2, T1> {
        match self {
            Self::Second(value) => Ok(value),
            Self::First(other) => Err(other),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T2> {
        match self {
            Self::Second(value) => Option::Some(value),
            Self::First(_) => Option::None,
        }
    }
}

// =============================================================================
// OneOf3
// =============================================================================

impl<T1, T2, T3> Member<T1, At1> for OneOf3<T1, T2, T3> {
    type Remainder = OneOf2<T2, T3>;

    #[inline]
    fn inject(value: T1) -> Self {
        Self::First(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T1, Self::Remainder> {
        match self {
            Self::First(value) => Ok(value),
            Self::Second(other) => Err(OneOf2::First(other)),
            Self::Third(other) => Err(OneOf2::Second(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T1> {
        match self {
            Self::First(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}

impl<T1, T2, T3> Member<T2, At2> for OneOf3<T1, T2, T3> {
    type Remainder = OneOf2<T1, T3>;

    #[inline]
    fn inject(value: T2) -> Self {
        Self::Second(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T2, Self::Remainder> {
        match self {
            Self::Second(value) => Ok(value),
            Self::First(other) => Err(OneOf2::First(other)),
            Self::Third(other) => Err(OneOf2::Second(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T2> {
        match self {
            Self::Second(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}

impl<T1, T2, T3> Member<T3, At3> for OneOf3<T1, T2, T3> {
    type Remainder = OneOf2<T1, T2>;

    #[inline]
    fn inject(value: T3) -> Self {
        Self::Third(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T3, Self::Remainder> {
        match self {
            Self::Third(value) => Ok(value),
            Self::First(other) => Err(OneOf2::First(other)),
            Self::Second(other) => Err(OneOf2::Second(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T3> {
        match self {
            Self::Third(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}

// =============================================================================
// OneOf4
// =============================================================================

impl<T1, T2, T3, T4> Member<T1, At1> for OneOf4<T1, T2, T3, T4> {
    type Remainder = OneOf3<T2, T3, T4>;

    #[inline]
    fn inject(value: T1) -> Self {
        Self::First(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T1, Self::Remainder> {
        match self {
            Self::First(value) => Ok(value),
            Self::Second(other) => Err(OneOf3::First(other)),
            Self::Third(other) => Err(OneOf3::Second(other)),
            Self::Fourth(other) => Err(OneOf3::Third(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T1> {
        match self {
            Self::First(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}

impl<T1, T2, T3, T4> Member<T2, At2> for OneOf4<T1, T2, T3, T4> {
    type Remainder = OneOf3<T1, T3, T4>;

    #[inline]
    fn inject(value: T2) -> Self {
        Self::Second(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T2, Self::Remainder> {
        match self {
            Self::Second(value) => Ok(value),
            Self::First(other) => Err(OneOf3::First(other)),
            Self::Third(other) => Err(OneOf3::Second(other)),
            Self::Fourth(other) => Err(OneOf3::Third(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T2> {
        match self {
            Self::Second(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}

impl<T1, T2, T3, T4> Member<T3, At3> for OneOf4<T1, T2, T3, T4> {
    type Remainder = OneOf3<T1, T2, T4>;

    #[inline]
    fn inject(value: T3) -> Self {
        Self::Third(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T3, Self::Remainder> {
        match self {
            Self::Third(value) => Ok(value),
            Self::First(other) => Err(OneOf3::First(other)),
            Self::Second(other) => Err(OneOf3::Second(other)),
            Self::Fourth(other) => Err(OneOf3::Third(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T3> {
        match self {
            Self::Third(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}

impl<T1, T2, T3, T4> Member<T4, At4> for OneOf4<T1, T2, T3, T4> {
    type Remainder = OneOf3<T1, T2, T3>;

    #[inline]
    fn inject(value: T4) -> Self {
        Self::Fourth(value)
    }

    #[inline]
    fn project(self) -> core::result::Result<T4, Self::Remainder> {
        match self {
            Self::Fourth(value) => Ok(value),
            Self::First(other) => Err(OneOf3::First(other)),
            Self::Second(other) => Err(OneOf3::Second(other)),
            Self::Third(other) => Err(OneOf3::Third(other)),
        }
    }

    #[inline]
    fn project_ref(&self) -> Option<&T4> {
        match self {
            Self::Fourth(value) => Option::Some(value),
            _ => Option::None,
        }
    }
}
