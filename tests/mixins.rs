//! Capability composition: multiple mixins on one wrapper, state
//! synchronization, and member-name collisions.

use core::marker::PhantomData;

use basic_type::prelude::*;
use basic_type::{mixin_methods, mixins};

// =============================================================================
// Mixin definitions shared by the tests
// =============================================================================

name_tag!(AccountLabel = "account");

/// Stateless: recomputes from the current value on every call.
#[derive(Stateless)]
struct Shouting<W>(PhantomData<fn() -> W>);

mixin_methods! {
    impl Shouting for String {
        fn shout(&self) -> String {
            self.value().to_uppercase()
        }

        fn shout_with(&self, suffix: &str) -> String {
            let mut out = self.value().to_uppercase();
            out.push_str(suffix);
            out
        }
    }
}

/// Stateful: caches the character count, re-derived on every `set`.
#[derive(Stateful)]
struct CharCount<W> {
    count: usize,
    _owner: PhantomData<fn() -> W>,
}

impl<W> Cache<String> for CharCount<W> {
    fn derive(value: &String) -> Self {
        CharCount {
            count: value.chars().count(),
            _owner: PhantomData,
        }
    }
}

impl<W> Clone for CharCount<W> {
    fn clone(&self) -> Self {
        CharCount {
            count: self.count,
            _owner: PhantomData,
        }
    }
}

impl<W> PartialEq for CharCount<W> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

trait CharCountMethods<K> {
    fn char_count(&self) -> usize;
}

impl<W, I> CharCountMethods<I> for W
where
    W: Holds<CharCount<This>, I, State = CharCount<W>>,
{
    fn char_count(&self) -> usize {
        self.state().count
    }
}

// =============================================================================
// Composition
// =============================================================================

type Account = BasicType<
    String,
    Required,
    Mutable,
    mixins![Named<AccountLabel>, Shouting<This>, CharCount<This>],
>;

#[test]
fn every_mixin_contributes_its_operations() {
    let account = Account::new(String::from("alice"));

    assert_eq!(account.get(), "alice");
    assert_eq!(account.name(), "account");
    assert_eq!(account.shout(), "ALICE");
    assert_eq!(account.shout_with("!"), "ALICE!");
    assert_eq!(account.char_count(), 5);
}

#[test]
fn stateless_results_follow_the_current_value() {
    let mut account = Account::new(String::from("alice"));
    assert_eq!(account.shout(), "ALICE");

    account.set(String::from("bob"));
    assert_eq!(account.shout(), "BOB");
}

#[test]
fn stateful_mixins_rederive_on_set_exactly_from_the_new_value() {
    let mut account = Account::new(String::from("alice"));
    assert_eq!(account.char_count(), 5);

    account.set(String::from("bob"));
    assert_eq!(account.get(), "bob");
    assert_eq!(account.char_count(), 3);
}

#[test]
fn clone_carries_every_sub_state_in_lockstep() {
    let mut account = Account::new(String::from("alice"));
    let snapshot = account.clone();

    account.set(String::from("bo"));

    // The clone kept the state derived from "alice"...
    assert_eq!(snapshot.get(), "alice");
    assert_eq!(snapshot.char_count(), 5);

    // ...and the original is fully re-synchronized.
    assert_eq!(account.char_count(), 2);
    assert!(account != snapshot);
}

#[test]
fn assignment_replaces_the_whole_composed_state() {
    let mut account = Account::new(String::from("alice"));
    let other = Account::new(String::from("bob"));

    account = other.clone();

    assert_eq!(account.get(), "bob");
    assert_eq!(account.char_count(), 3);
    assert!(account == other);
}

// =============================================================================
// Member-name collisions
// =============================================================================

#[derive(Stateless)]
struct Loud<W>(PhantomData<fn() -> W>);

// Same operation name as Shouting::shout, different derivation.
trait LoudMethods<K> {
    fn shout(&self) -> String;
}

impl<W, I> LoudMethods<I> for W
where
    W: Value<Inner = String> + Holds<Loud<This>, I>,
{
    fn shout(&self) -> String {
        let mut out = self.value().to_uppercase();
        out.push_str("!!!");
        out
    }
}

#[test]
fn colliding_operations_are_reached_with_fully_qualified_calls() {
    type Noisy = BasicType<String, Required, Immutable, mixins![Shouting<This>, Loud<This>]>;

    let noisy = Noisy::new(String::from("hey"));

    // `noisy.shout()` is a compile-time ambiguity here; both contributions
    // stay reachable through the trait they came from.
    assert_eq!(ShoutingMethods::shout(&noisy), "HEY");
    assert_eq!(LoudMethods::shout(&noisy), "HEY!!!");
}

// =============================================================================
// Mixin-owned mutable sub-state
// =============================================================================

/// Counts reads since construction or the last `set`.
#[derive(Stateful)]
struct Touches<W> {
    count: u32,
    _owner: PhantomData<fn() -> W>,
}

impl<W> Cache<String> for Touches<W> {
    fn derive(_: &String) -> Self {
        Touches {
            count: 0,
            _owner: PhantomData,
        }
    }
}

trait TouchesMethods<K> {
    fn touches(&self) -> u32;
    fn touch(&mut self);
}

impl<W, I> TouchesMethods<I> for W
where
    W: Holds<Touches<This>, I, State = Touches<W>>,
{
    fn touches(&self) -> u32 {
        self.state().count
    }

    fn touch(&mut self) {
        self.state_mut().count += 1;
    }
}

#[test]
fn mixins_may_own_and_mutate_their_sub_state() {
    type Tracked = BasicType<String, Required, Mutable, mixins![Touches<This>]>;

    let mut tracked = Tracked::new(String::from("alice"));
    assert_eq!(tracked.touches(), 0);

    tracked.touch();
    tracked.touch();
    assert_eq!(tracked.touches(), 2);

    // `set` re-derives the sub-state, so the counter starts over.
    tracked.set(String::from("bob"));
    assert_eq!(tracked.touches(), 0);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn composition_order_is_the_order_written() {
    // Same mixins, different order: still distinct nominal types with the
    // same behavior.
    type Forward = BasicType<String, Required, Immutable, mixins![Shouting<This>, CharCount<This>]>;
    type Backward = BasicType<String, Required, Immutable, mixins![CharCount<This>, Shouting<This>]>;

    let forward = Forward::new(String::from("abc"));
    let backward = Backward::new(String::from("abc"));

    assert_eq!(forward.shout(), backward.shout());
    assert_eq!(forward.char_count(), backward.char_count());
}
