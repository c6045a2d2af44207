use rand::{rngs::StdRng, Rng, SeedableRng};
use std::marker::PhantomData;

/// An interface for types that can be randomly (or exhaustively) generated, for use as test
/// inputs. Implementors must obey these requirements:
///
/// - `make` must be a pure function. That is, it must behave deterministically (given the output
///   of `gen`), and it cannot have side effects.
/// - For any given `size`, `make` must produce only finitely many possible values.
pub trait Arbitrary: Sized {
    fn make<'g>(size: u32, gen: Gen<'g>) -> Self;
}

/// A source of randomness (or exhaustiveness) for constructing [Arbitrary] values.
pub struct Gen<'g>(GenEnum<'g>);

enum GenEnum<'g> {
    Random(&'g mut StdRng),
    All(&'g mut GenAll),
}

/// An infinite stream of random values of the given size.
pub fn random<A: Arbitrary>(size: u32, seed: [u8; 32]) -> impl Iterator<Item = A> {
    GenRandomIter {
        size,
        rng: StdRng::from_seed(seed),
        phantom: PhantomData,
    }
}

/// A finite stream of every value of type `A` of the given size.
pub fn all<A: Arbitrary>(size: u32) -> impl Iterator<Item = A> {
    GenAllIter {
        size,
        gen: GenAll {
            index: 0,
            stack: vec![],
            done: false,
        },
        phantom: PhantomData,
    }
}

impl<'g> Gen<'g> {
    /// An integer in `0..max`.
    pub fn pick(&mut self, max: u32) -> u32 {
        assert_ne!(max, 0);

        match &mut self.0 {
            GenEnum::Random(rng) => rng.gen_range(0..max),
            GenEnum::All(all) => all.pick(max),
        }
    }

    pub fn reborrow<'a>(&'a mut self) -> Gen<'a> {
        match &mut self.0 {
            GenEnum::Random(rng) => Gen(GenEnum::Random(&mut **rng)),
            GenEnum::All(all) => Gen(GenEnum::All(&mut **all)),
        }
    }
}

/// Walks the tree of all possible sequences of picks, depth first. `stack` holds the current
/// sequence as `(pick, max)` pairs.
struct GenAll {
    index: usize,
    stack: Vec<(u32, u32)>,
    done: bool,
}

impl GenAll {
    fn advance(&mut self) {
        self.index = 0;
        while let Some((n, max)) = self.stack.pop() {
            if n + 1 < max {
                self.stack.push((n + 1, max));
                return;
            }
        }
        self.done = true;
    }

    fn pick(&mut self, max: u32) -> u32 {
        if let Some((n, _)) = self.stack.get(self.index) {
            self.index += 1;
            *n
        } else {
            self.stack.push((0, max));
            self.index += 1;
            0
        }
    }
}

struct GenAllIter<A: Arbitrary> {
    size: u32,
    gen: GenAll,
    phantom: PhantomData<A>,
}

impl<A: Arbitrary> Iterator for GenAllIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if self.gen.done {
            None
        } else {
            let item = A::make(self.size, Gen(GenEnum::All(&mut self.gen)));
            self.gen.advance();
            Some(item)
        }
    }
}

struct GenRandomIter<A: Arbitrary> {
    size: u32,
    rng: StdRng,
    phantom: PhantomData<A>,
}

impl<A: Arbitrary> Iterator for GenRandomIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        Some(A::make(self.size, Gen(GenEnum::Random(&mut self.rng))))
    }
}

#[test]
fn test_generate_all() {
    /// Binary trees with `size` nodes.
    #[derive(Debug)]
    enum Tree {
        Leaf,
        Branch(Box<Tree>, Box<Tree>),
    }

    impl Arbitrary for Tree {
        fn make(size: u32, mut gen: Gen) -> Tree {
            if size <= 1 {
                return Tree::Leaf;
            }
            let left_size = gen.pick(size - 1);
            let right_size = size - 1 - left_size;
            let left = Tree::make(left_size, gen.reborrow());
            let right = Tree::make(right_size, gen.reborrow());
            Tree::Branch(Box::new(left), Box::new(right))
        }
    }

    assert_eq!(all::<Tree>(3).count(), 2);
    assert_eq!(all::<Tree>(4).count(), 4);
    assert_eq!(all::<Tree>(5).count(), 9);
    assert_eq!(random::<Tree>(6, [7; 32]).take(10).count(), 10);
}
