//! `SequenceExt`: method syntax for every operator, quantifier, lookup and
//! materializer. Implemented for all `Sequence` types.
//!
//! Composing methods take `self` and return a new operator struct by value;
//! terminal methods borrow, so a pipeline can be scanned more than once.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use seqflow_core::prelude::*;
use seqflow_mem::SegmentPool;

use crate::filter::{Where, WhereAt};
use crate::flatten::SelectMany;
use crate::map::{Select, SelectAt};
use crate::partition::{Skip, Take};
use crate::view::ReadOnlyView;
use crate::{lookup, materialize, quantifier};

pub trait SequenceExt: Sequence + Sized {
    // ----- composition -----

    /// Where.
    fn filter<P>(self, predicate: P) -> Where<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Where::new(self, predicate)
    }

    fn filter_at<P>(self, predicate: P) -> WhereAt<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool + Clone,
    {
        WhereAt::new(self, predicate)
    }

    fn select<R, F>(self, selector: F) -> Select<Self, F>
    where
        F: Fn(Self::Item) -> R + Clone,
    {
        Select::new(self, selector)
    }

    fn select_at<R, F>(self, selector: F) -> SelectAt<Self, F>
    where
        F: Fn(Self::Item, usize) -> R + Clone,
    {
        SelectAt::new(self, selector)
    }

    fn select_many<I, F>(self, selector: F) -> SelectMany<Self, F>
    where
        I: Sequence,
        F: Fn(Self::Item) -> I + Clone,
    {
        SelectMany::new(self, selector)
    }

    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    fn read_only(self) -> ReadOnlyView<Self>
    where
        Self: IndexedSequence,
    {
        ReadOnlyView::new(self)
    }

    // ----- quantifiers -----

    fn count(&self) -> usize {
        quantifier::count(self)
    }

    fn count_where<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> usize {
        quantifier::count_where(self, predicate)
    }

    fn contains(&self, value: Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        quantifier::contains(self, &value)
    }

    fn contains_by<E>(&self, value: Self::Item, eq: E) -> bool
    where
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        quantifier::contains_by(self, &value, eq)
    }

    fn all<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> bool {
        quantifier::all(self, predicate)
    }

    fn all_at<P: FnMut(&Self::Item, usize) -> bool>(&self, predicate: P) -> bool {
        quantifier::all_at(self, predicate)
    }

    fn any(&self) -> bool {
        quantifier::any(self)
    }

    fn any_where<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> bool {
        quantifier::any_where(self, predicate)
    }

    fn any_at<P: FnMut(&Self::Item, usize) -> bool>(&self, predicate: P) -> bool {
        quantifier::any_at(self, predicate)
    }

    // ----- lookup -----

    fn first(&self) -> Result<Self::Item> {
        lookup::first(self)
    }

    fn first_where<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> Result<Self::Item> {
        lookup::first_where(self, predicate)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        lookup::first_or_default(self)
    }

    fn first_or_default_where<P>(&self, predicate: P) -> Self::Item
    where
        Self::Item: Default,
        P: FnMut(&Self::Item) -> bool,
    {
        lookup::first_or_default_where(self, predicate)
    }

    fn try_first(&self) -> ElementResult<Self::Item> {
        lookup::try_first(self)
    }

    fn try_first_where<P>(&self, predicate: P) -> ElementResult<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        lookup::try_first_where(self, predicate)
    }

    fn try_first_at<P>(&self, predicate: P) -> Option<Found<Self::Item>>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        lookup::try_first_at(self, predicate)
    }

    fn single(&self) -> Result<Self::Item> {
        lookup::single(self)
    }

    fn single_where<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> Result<Self::Item> {
        lookup::single_where(self, predicate)
    }

    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        lookup::single_or_default(self)
    }

    fn single_or_default_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        Self::Item: Default,
        P: FnMut(&Self::Item) -> bool,
    {
        lookup::single_or_default_where(self, predicate)
    }

    fn try_single(&self) -> ElementResult<Self::Item> {
        lookup::try_single(self)
    }

    fn try_single_where<P>(&self, predicate: P) -> ElementResult<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        lookup::try_single_where(self, predicate)
    }

    fn try_single_at<P>(&self, predicate: P) -> ElementResult<Found<Self::Item>>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        lookup::try_single_at(self, predicate)
    }

    fn element_at(&self, index: usize) -> Result<Self::Item> {
        lookup::element_at(self, index)
    }

    fn try_element_at(&self, index: usize) -> Option<Self::Item> {
        lookup::try_element_at(self, index)
    }

    fn index_of(&self, value: Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        lookup::index_of(self, &value)
    }

    // ----- materialization -----

    /// Uses the shared pool for `Self::Item`; borrowed items need `to_vec_in`.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Send + 'static,
    {
        materialize::to_vec(self)
    }

    fn to_vec_in(&self, pool: &SegmentPool<Self::Item>) -> Vec<Self::Item> {
        materialize::to_vec_in(self, pool)
    }

    fn to_array(&self) -> Box<[Self::Item]>
    where
        Self::Item: Send + 'static,
    {
        materialize::to_array(self)
    }

    fn to_array_in(&self, pool: &SegmentPool<Self::Item>) -> Box<[Self::Item]> {
        materialize::to_array_in(self, pool)
    }

    fn to_dictionary<K, KF>(&self, key_selector: KF) -> Result<HashMap<K, Self::Item>>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
    {
        materialize::to_dictionary(self, key_selector)
    }

    fn to_dictionary_with<K, V, KF, VF>(
        &self,
        key_selector: KF,
        element_selector: VF,
    ) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
    {
        materialize::to_dictionary_with(self, key_selector, element_selector)
    }

    fn to_dictionary_with_hasher<K, V, KF, VF, H>(
        &self,
        key_selector: KF,
        element_selector: VF,
        hasher: H,
    ) -> Result<HashMap<K, V, H>>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
        H: BuildHasher,
    {
        materialize::to_dictionary_with_hasher(self, key_selector, element_selector, hasher)
    }

    /// Host-protocol interop: a std `Iterator` that releases the cursor when
    /// exhausted or dropped.
    fn iter(&self) -> CursorIter<Self::Cursor> {
        CursorIter::new(self.cursor())
    }
}

impl<S: Sequence> SequenceExt for S {}
