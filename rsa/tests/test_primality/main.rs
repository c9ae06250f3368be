mod miller_rabin;
