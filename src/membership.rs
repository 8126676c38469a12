use crate::{TlockG1, TlockG2};
use ark_ec::CurveGroup;

pub trait MembershipTesting {
    /// Input a projective curve point, check if it is in the correct group,
    /// a.k.a. the prime order subgroup.
    fn is_in_prime_group(&self) -> bool;
}

impl MembershipTesting for TlockG1 {
    fn is_in_prime_group(&self) -> bool {
        let t = self.into_affine();
        t.is_on_curve() && t.is_in_correct_subgroup_assuming_on_curve()
    }
}

impl MembershipTesting for TlockG2 {
    fn is_in_prime_group(&self) -> bool {
        let t = self.into_affine();
        t.is_on_curve() && t.is_in_correct_subgroup_assuming_on_curve()
    }
}
