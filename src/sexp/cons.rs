use std::convert::TryFrom;
use std::mem;

use super::sexp::{HeapSexp, Sexp};


/// A pair. Exclusively owns both of its slots, so lists are trees.
///
/// Clone, PartialEq and Drop walk the cdr chain in a loop rather than
/// recursing, so long lists do not exhaust the native stack.
#[derive(Debug)]
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

impl Cons {
    pub fn new(car: HeapSexp, cdr: HeapSexp) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> &Sexp {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> &Sexp {
        self.cdr.as_ref()
    }

    pub fn consume(mut self) -> (HeapSexp, HeapSexp) {
        (mem::take(&mut self.car), mem::take(&mut self.cdr))
    }
}


impl Clone for Cons {
    fn clone(&self) -> Self {
        let mut cars = Vec::new();
        let mut curr = self.cdr();
        while let Sexp::Cons(cons) = curr {
            cars.push(cons.car.clone());
            curr = cons.cdr();
        }

        let mut cdr = HeapSexp::new(curr.clone());
        while let Some(car) = cars.pop() {
            cdr = HeapSexp::new(Sexp::Cons(Cons::new(car, cdr)));
        }
        Cons::new(self.car.clone(), cdr)
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            if a.car != b.car {
                return false;
            }
            match (a.cdr(), b.cdr()) {
                (Sexp::Cons(next_a), Sexp::Cons(next_b)) => {
                    a = next_a;
                    b = next_b;
                }
                (tail_a, tail_b) => return tail_a == tail_b,
            }
        }
    }
}

impl Drop for Cons {
    fn drop(&mut self) {
        if !matches!(*self.car, Sexp::Cons(_)) && !matches!(*self.cdr, Sexp::Cons(_)) {
            return;
        }

        // Detach nested cells before they drop so each drop stays shallow.
        let mut pending = vec![mem::take(&mut self.car), mem::take(&mut self.cdr)];
        while let Some(mut sexp) = pending.pop() {
            if let Sexp::Cons(cons) = &mut *sexp {
                pending.push(mem::take(&mut cons.car));
                pending.push(mem::take(&mut cons.cdr));
            }
        }
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Cons {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl TryFrom<HeapSexp> for Cons {
    type Error = HeapSexp;

    fn try_from(value: HeapSexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = *value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
